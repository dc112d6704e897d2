pub mod builder;
pub mod frame;

pub use builder::build_menu;
pub use frame::render;

pub const ROOT_LABEL: &str = "Scenes";
pub const LOAD_LABEL: &str = "Load";
pub const CLOSE_LABEL: &str = "Close";
pub const REMOVE_LABEL: &str = "Remove";
pub const SINGLE_LABEL: &str = "Single";
pub const ADDITIVE_LABEL: &str = "Additive";

pub const FOLDER_ICON: &str = "folder";
pub const SCENE_ICON: &str = "scene";
