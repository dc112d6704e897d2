use directories::ProjectDirs;
use radial::{Key, MenuSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub activation_key: Key,
    pub radius: f64,
    pub list_radius: f64,
    pub assets_dir: PathBuf,
    pub scene_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_key: Key::default(),
            radius: 100.0,
            list_radius: 150.0,
            assets_dir: PathBuf::from("Assets"),
            scene_extension: "unity".to_string(),
        }
    }
}

impl Config {
    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings {
            activation_key: self.activation_key.clone(),
            radius: self.radius,
        }
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.scene_extension.trim_start_matches('.')
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "scenewheel", "scenewheel")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("SCENEWHEEL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
