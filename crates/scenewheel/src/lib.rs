pub mod app;
pub mod config;
pub mod events;
pub mod menu;
pub mod protocol;
pub mod scenes;
pub mod sys;
