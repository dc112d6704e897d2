use std::path::{Path, PathBuf};
use strum::Display as StrumDisplay;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum OpenMode {
    Single,
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum SceneState {
    Loaded,
    Unloaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenScene {
    pub path: PathBuf,
    pub state: SceneState,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("Scene {0} is not open")]
    NotOpen(PathBuf),
    #[error("Cannot close {0}, it is the last loaded scene")]
    LastLoaded(PathBuf),
}

/// Scenes currently in the editor hierarchy, in hierarchy order.
#[derive(Debug, Default)]
pub struct Workspace {
    scenes: Vec<OpenScene>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenes(&self) -> &[OpenScene] {
        &self.scenes
    }

    pub fn loaded(&self) -> impl Iterator<Item = &Path> {
        self.scenes
            .iter()
            .filter(|s| s.state == SceneState::Loaded)
            .map(|s| s.path.as_path())
    }

    pub fn state(&self, path: &Path) -> Option<SceneState> {
        self.scenes.iter().find(|s| s.path == path).map(|s| s.state)
    }

    pub fn open(&mut self, path: &Path, mode: OpenMode) {
        match mode {
            OpenMode::Single => self.scenes.clear(),
            OpenMode::Additive => {
                if let Some(scene) = self.scenes.iter_mut().find(|s| s.path == path) {
                    scene.state = SceneState::Loaded;
                    log::info!("Reloaded {}", path.display());
                    return;
                }
            }
        }
        self.scenes.push(OpenScene {
            path: path.to_path_buf(),
            state: SceneState::Loaded,
        });
        log::info!("Opened {} ({})", path.display(), mode);
    }

    /// Unloads a scene, or drops it from the hierarchy entirely when `remove` is set.
    pub fn close(&mut self, path: &Path, remove: bool) -> Result<(), SceneError> {
        let index = self
            .scenes
            .iter()
            .position(|s| s.path == path)
            .ok_or_else(|| SceneError::NotOpen(path.to_path_buf()))?;

        if self.scenes[index].state == SceneState::Loaded && self.loaded().count() == 1 {
            return Err(SceneError::LastLoaded(path.to_path_buf()));
        }

        if remove {
            self.scenes.remove(index);
            log::info!("Removed {}", path.display());
        } else {
            self.scenes[index].state = SceneState::Unloaded;
            log::info!("Closed {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn test_single_replaces_hierarchy() {
        let mut ws = Workspace::new();
        ws.open(&p("a.unity"), OpenMode::Single);
        ws.open(&p("b.unity"), OpenMode::Additive);
        ws.open(&p("c.unity"), OpenMode::Single);
        let loaded: Vec<&Path> = ws.loaded().collect();
        assert_eq!(loaded, [Path::new("c.unity")]);
    }

    #[test]
    fn test_additive_appends_or_reloads() {
        let mut ws = Workspace::new();
        ws.open(&p("a.unity"), OpenMode::Single);
        ws.open(&p("b.unity"), OpenMode::Additive);
        ws.close(&p("b.unity"), false).unwrap();
        assert_eq!(ws.state(&p("b.unity")), Some(SceneState::Unloaded));

        ws.open(&p("b.unity"), OpenMode::Additive);
        assert_eq!(ws.scenes().len(), 2);
        assert_eq!(ws.state(&p("b.unity")), Some(SceneState::Loaded));
    }

    #[test]
    fn test_close_keeps_entry_and_remove_drops_it() {
        let mut ws = Workspace::new();
        ws.open(&p("a.unity"), OpenMode::Single);
        ws.open(&p("b.unity"), OpenMode::Additive);

        ws.close(&p("a.unity"), false).unwrap();
        assert_eq!(ws.scenes().len(), 2);

        ws.close(&p("a.unity"), true).unwrap();
        assert_eq!(ws.scenes().len(), 1);
        assert_eq!(ws.state(&p("a.unity")), None);
    }

    #[test]
    fn test_last_loaded_scene_cannot_close() {
        let mut ws = Workspace::new();
        ws.open(&p("a.unity"), OpenMode::Single);
        assert_eq!(
            ws.close(&p("a.unity"), true),
            Err(SceneError::LastLoaded(p("a.unity")))
        );
        assert_eq!(
            ws.close(&p("b.unity"), false),
            Err(SceneError::NotOpen(p("b.unity")))
        );
    }
}
