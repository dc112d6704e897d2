use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::scenes::Catalog;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the socket server and the file watchers on a tokio runtime in a background thread.
/// Everything they produce reaches the menu thread through `tx`.
pub fn start_background_services(tx: Sender<AppEvent>, catalog: Catalog) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(tx).await;
                });
            }

            match config::get_config_path() {
                Ok(path) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        crate::sys::watcher::watch_config(path, tx).await;
                    });
                }
                Err(e) => log::error!("Config watcher disabled: {}", e),
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::watcher::watch_assets(catalog, tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}

/// Catalog for the configured assets directory, scanned once up front.
pub fn initial_catalog(config: &Config) -> Catalog {
    let catalog = Catalog::new(&config.assets_dir, config.extension());
    catalog.refresh();
    catalog
}
