use crate::events::AppEvent;
use crate::protocol;
use async_channel::Sender;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_NAME: &str = "scenewheel.sock";

/// Socket in the XDG runtime directory, falling back to `/tmp`.
pub fn socket_path() -> PathBuf {
    xdg::BaseDirectories::new()
        .place_runtime_file(SOCKET_NAME)
        .unwrap_or_else(|_| std::env::temp_dir().join(SOCKET_NAME))
}

pub async fn run_server(tx: Sender<AppEvent>) {
    let path = socket_path();

    // Cleanup old socket if it exists
    if std::fs::metadata(&path).is_ok() {
        let _ = std::fs::remove_file(&path);
    }

    let listener = match UnixListener::bind(&path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", path.display(), e);
            return;
        }
    };
    log::info!("Listening on {}", path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match protocol::parse_line(&line) {
                            Ok(event) => {
                                if tx.send(event).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => log::warn!("Ignoring '{}': {}", line.trim(), e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
