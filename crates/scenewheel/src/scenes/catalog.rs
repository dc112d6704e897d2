use derive_more::{AsRef, Deref, Display, From, Into};
use fs_err as fs;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct SceneName(String);

radial::impl_string_newtype!(SceneName);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneAsset {
    pub name: SceneName,
    pub path: PathBuf,
}

impl SceneAsset {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            name: scene_name(&path),
            path,
        }
    }
}

/// Display name of a scene file: its file name without the extension.
pub fn scene_name(path: &Path) -> SceneName {
    let name = path
        .file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    SceneName::new(name)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn collect_scene_files(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) => {
            log::debug!("Skipping unreadable directory: {}", e);
            return;
        }
    };

    // Symlinked directories are not descended into, so a link cycle cannot repeat scenes.
    for entry in read_dir.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            collect_scene_files(&path, extension, out);
        } else if has_extension(&path, extension) && !path.is_dir() {
            out.push(path);
        }
    }
}

/// Every scene file under `dir`, sorted by path.
pub fn scan(dir: &Path, extension: &str) -> Vec<SceneAsset> {
    let mut files = Vec::new();
    collect_scene_files(dir, extension, &mut files);
    files.sort();
    files.into_iter().map(SceneAsset::from_path).collect()
}

/// Scene list shared between the watcher thread, which rescans, and the menu thread, which reads.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    extension: String,
    scenes: Arc<RwLock<Vec<SceneAsset>>>,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            scenes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Rescans the directory. Returns `true` when the scene list changed.
    pub fn refresh(&self) -> bool {
        let found = scan(&self.dir, &self.extension);
        let mut scenes = self.scenes.write();
        if *scenes == found {
            return false;
        }
        log::info!("Found {} scenes in {}", found.len(), self.dir.display());
        *scenes = found;
        true
    }

    pub fn scenes(&self) -> Vec<SceneAsset> {
        self.scenes.read().clone()
    }
}
