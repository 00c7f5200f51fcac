//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the simulated transport, notification lifetime, theme and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, Hotkeys};

use crate::error::AppError;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/contact-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub submit_delay_ms: u64,
    pub failure_rate: f64,
    pub notification_ttl_ms: u64,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default)]
    pub failure_rate: f64,
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
    #[serde(default)]
    pub hotkeys: Hotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_notification_ttl_ms() -> u64 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            submit_delay_ms: default_submit_delay_ms(),
            failure_rate: 0.0,
            notification_ttl_ms: default_notification_ttl_ms(),
            hotkeys: Hotkeys::default(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write the defaults to
    /// the default path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|source| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::PathNotSet)?;

        if file_path.exists() {
            debug!("Loading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
                path: file_path.clone(),
                source,
            })?;
            self.apply(Config::parse(&contents)?);
        } else {
            info!(
                "No configuration found, writing defaults to {}...",
                file_path.display()
            );
            self.save()?;
        }

        Ok(())
    }

    /// Parse the contents of a configuration file.
    ///
    fn parse(contents: &str) -> Result<FileSpec, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    fn apply(&mut self, data: FileSpec) {
        self.theme_name = data.theme_name;
        self.submit_delay_ms = data.submit_delay_ms;
        self.failure_rate = if data.failure_rate.is_nan() {
            0.0
        } else {
            data.failure_rate.clamp(0.0, 1.0)
        };
        self.notification_ttl_ms = data.notification_ttl_ms;
        self.hotkeys = data.hotkeys.with_defaults();
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::PathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            submit_delay_ms: self.submit_delay_ms,
            failure_rate: self.failure_rate,
            notification_ttl_ms: self.notification_ttl_ms,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data).map_err(ConfigError::from)?;

        if let Some(parent) = file_path.parent().filter(|p| !p.exists()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(file_path, content).map_err(|source| ConfigError::Write {
            path: file_path.clone(),
            source,
        })?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "contact-tui-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let mut config = Config::new();
        config.apply(Config::parse("{}").unwrap());
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.failure_rate, 0.0);
        assert_eq!(config.notification_ttl_ms, 4000);
        assert_eq!(config.hotkeys, Hotkeys::default());
    }

    #[test]
    fn test_parse_clamps_failure_rate() {
        let mut config = Config::new();
        config.apply(Config::parse("failure_rate: 7.5").unwrap());
        assert_eq!(config.failure_rate, 1.0);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = Config::parse("submit_delay_ms: [nope");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn test_load_writes_defaults_then_reads_them_back() {
        let dir = temp_dir("load");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert!(dir.join(FILE_NAME).exists());

        let mut saved = config.clone();
        saved.submit_delay_ms = 10;
        saved.theme_name = "rose-pine-dawn".to_string();
        saved.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.submit_delay(), Duration::from_millis(10));
        assert_eq!(reloaded.theme_name, "rose-pine-dawn");
        assert_eq!(
            reloaded.hotkeys.get(HotkeyAction::Submit),
            Some(&hotkeys::Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }
}
