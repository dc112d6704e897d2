use clap::{Parser, Subcommand};
use scenewheel::app::AppModel;
use scenewheel::sys::{runtime, server};
use scenewheel::{config, protocol};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "scenewheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Run the menu daemon (default).
    Daemon,
    /// Forward one command to the running daemon, e.g. `send key-down s`.
    Send {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Write the default config file and print its path.
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Daemon) {
        Commands::Daemon => run_daemon(),
        Commands::Send { words } => send_command(&words.join(" ")),
        Commands::Init => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_daemon() -> anyhow::Result<()> {
    let config = config::load_or_default();
    let catalog = runtime::initial_catalog(&config);

    let (tx, rx) = async_channel::bounded(64);
    runtime::start_background_services(tx, catalog.clone());

    AppModel::new(config, catalog).run(rx);
    Ok(())
}

fn send_command(line: &str) -> anyhow::Result<()> {
    // reject garbage here rather than in the daemon log
    protocol::parse_line(line)?;

    let path = server::socket_path();
    let mut stream = UnixStream::connect(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to scenewheel daemon at {}: {}. Is it running?",
            path.display(),
            e
        )
    })?;

    writeln!(stream, "{}", line)?;
    Ok(())
}
