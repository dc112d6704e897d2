use crate::events::AppEvent;
use radial::input::ParseInputError;
use radial::{InputEvent, Key, MouseButton, Point};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Verb {
    KeyDown,
    KeyUp,
    Move,
    Press,
    Show,
    Hide,
    Surface,
    Rescan,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownVerb(String),
    #[error("'{0}' is missing an argument")]
    MissingArgument(&'static str),
    #[error("unexpected trailing argument '{0}'")]
    TrailingArgument(String),
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("invalid mouse button '{0}'")]
    InvalidButton(String),
    #[error(transparent)]
    Key(#[from] ParseInputError),
}

fn coordinate(word: &str) -> Result<f64, ProtocolError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProtocolError::InvalidCoordinate(word.to_string()))
}

/// Parses one protocol line, e.g. `key-down s`, `move 120 48`, `press left`.
pub fn parse_line(line: &str) -> Result<AppEvent, ProtocolError> {
    let mut words = line.split_whitespace();
    let head = words.next().ok_or(ProtocolError::Empty)?;
    let verb = Verb::from_str(head).map_err(|_| ProtocolError::UnknownVerb(head.to_string()))?;

    let mut arg = |name: &'static str| words.next().ok_or(ProtocolError::MissingArgument(name));
    let event = match verb {
        Verb::KeyDown => AppEvent::Input(InputEvent::KeyDown(Key::from_str(arg("key-down")?)?)),
        Verb::KeyUp => AppEvent::Input(InputEvent::KeyUp(Key::from_str(arg("key-up")?)?)),
        Verb::Move => {
            let x = coordinate(arg("move")?)?;
            let y = coordinate(arg("move")?)?;
            AppEvent::Input(InputEvent::PointerMove(Point::new(x, y)))
        }
        Verb::Press => {
            let word = arg("press")?;
            let button = MouseButton::from_str(word)
                .map_err(|_| ProtocolError::InvalidButton(word.to_string()))?;
            AppEvent::Input(InputEvent::PointerDown(button))
        }
        Verb::Show => AppEvent::Show,
        Verb::Hide => AppEvent::Hide,
        Verb::Surface => AppEvent::SurfaceChanged,
        Verb::Rescan => AppEvent::Rescan,
    };

    match words.next() {
        Some(extra) => Err(ProtocolError::TrailingArgument(extra.to_string())),
        None => Ok(event),
    }
}
