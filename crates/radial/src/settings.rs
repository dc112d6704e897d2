use crate::input::Key;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f64 = 150.0;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Holding this key keeps the menu open.
    pub activation_key: Key,
    /// Ring radius in pixels, unless the displayed node overrides it.
    pub radius: f64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            activation_key: Key::default(),
            radius: DEFAULT_RADIUS,
        }
    }
}
