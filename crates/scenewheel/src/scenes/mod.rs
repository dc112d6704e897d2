pub mod catalog;
pub mod workspace;

pub use catalog::{Catalog, SceneAsset, SceneName};
pub use workspace::{OpenMode, SceneError, SceneState, Workspace};
