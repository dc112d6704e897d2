use derive_more::{AsRef, Deref, Display};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::ops::Sub;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Screen-space position. `y` grows downwards, so angles sweep clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("key name is empty")]
    EmptyKey,
}

/// Keyboard key name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, Display, Deref, AsRef)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_lowercase())
    }
}

impl FromStr for Key {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseInputError::EmptyKey);
        }
        Ok(Self::new(s))
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::new("s")
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[strum(serialize = "Primary", serialize = "left", serialize = "0")]
    Primary,
    #[strum(serialize = "Secondary", serialize = "right", serialize = "1")]
    Secondary,
    #[strum(serialize = "Middle", serialize = "2")]
    Middle,
}

/// Raw input delivered by the host surface, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerMove(Point),
    PointerDown(MouseButton),
}
