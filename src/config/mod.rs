//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_keepsake::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedKeepsake";

/// Directory probed for photos when no `--album` flag or config entry is set.
pub const DEFAULT_ALBUM_DIR: &str = "photos";

/// Music file played when no `--music` flag or config entry is set.
pub const DEFAULT_MUSIC_FILE: &str = "music.mp3";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub album_dir: Option<PathBuf>,
    #[serde(default)]
    pub music_path: Option<PathBuf>,
    #[serde(default)]
    pub music_autoplay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            album_dir: None,
            music_path: None,
            music_autoplay: Some(true),
        }
    }
}

impl Config {
    /// Returns the album directory to probe, falling back to [`DEFAULT_ALBUM_DIR`].
    pub fn album_dir(&self) -> PathBuf {
        self.album_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ALBUM_DIR))
    }

    /// Returns the music file to play, falling back to [`DEFAULT_MUSIC_FILE`].
    pub fn music_path(&self) -> PathBuf {
        self.music_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MUSIC_FILE))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
