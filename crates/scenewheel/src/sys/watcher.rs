use crate::events::AppEvent;
use crate::scenes::Catalog;
use async_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

fn is_meaningful(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Watches `dir` and forwards whatever `handle` makes of each event, until the receiver is gone.
async fn watch<F>(dir: &Path, mode: RecursiveMode, tx: Sender<AppEvent>, mut handle: F)
where
    F: FnMut(Event) -> Option<AppEvent>,
{
    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(dir, mode) {
        log::error!("Failed to watch {}: {}", dir.display(), e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if let Some(app_event) = handle(event)
                    && tx.send(app_event).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

pub async fn watch_config(config_path: PathBuf, tx: Sender<AppEvent>) {
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };
    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    watch(&config_dir, RecursiveMode::NonRecursive, tx, |event| {
        (is_meaningful(&event) && event.paths.iter().any(|p| p == &config_path))
            .then_some(AppEvent::ConfigReload)
    })
    .await;
}

/// Any create, modify or remove may bring scenes in, even when it only names a directory.
/// `refresh` decides whether the list actually changed.
fn assets_event(catalog: &Catalog, event: &Event) -> Option<AppEvent> {
    (is_meaningful(event) && catalog.refresh()).then_some(AppEvent::AssetsChanged)
}

/// Rescans the catalog here, off the menu thread, and only signals when the scene list changed.
pub async fn watch_assets(catalog: Catalog, tx: Sender<AppEvent>) {
    let dir = catalog.dir().to_path_buf();

    watch(&dir, RecursiveMode::Recursive, tx, |event| {
        assets_event(&catalog, &event)
    })
    .await;
}
