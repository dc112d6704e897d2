pub mod angle;
pub mod engine;
pub mod input;
pub mod layout;
pub mod macros;
pub mod settings;
pub mod tree;

pub use engine::{Engine, HoverChange, Response, Sector, SectorKind};
pub use input::{InputEvent, Key, MouseButton, Point};
pub use settings::MenuSettings;
pub use tree::{Action, IconTag, Label, MenuItem, MenuNode, MenuTree, NodeId};
