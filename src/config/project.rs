use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ConfigData;
use crate::error::{ConfigError, ErrorContext, ScrubResult};
use crate::stripper::Strategy;

pub const CONFIG_DIR: &str = ".logscrub";
pub const CONFIG_FILE: &str = "config.toml";

/// Keys accepted by [`Config::get`] and [`Config::set`]
pub const KEYS: [&str; 6] = [
    "markers.target",
    "markers.protected",
    "strip.strategy",
    "strip.files",
    "strip.discover_root",
    "strip.discover_extension",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    pub fn path_for(project_root: impl AsRef<Path>) -> PathBuf {
        project_root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load the project config, failing if it has not been initialized
    pub fn load(project_root: impl AsRef<Path>) -> ScrubResult<Self> {
        let config_path = Self::path_for(project_root);
        if !config_path.exists() {
            return Err(ConfigError::NotFound { path: config_path }.into());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let data = toml::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        debug!(path = %config_path.display(), "loaded config");
        Ok(Self {
            data,
            path: config_path,
        })
    }

    pub fn load_or_default(project_root: impl AsRef<Path>) -> ScrubResult<Self> {
        let config_path = Self::path_for(&project_root);

        if config_path.exists() {
            Self::load(project_root)
        } else {
            Ok(Self {
                data: ConfigData::default(),
                path: config_path,
            })
        }
    }

    /// Write a default config unless one already exists. Returns its path.
    pub fn init(project_root: impl AsRef<Path>) -> ScrubResult<PathBuf> {
        let config_path = Self::path_for(&project_root);

        if !config_path.exists() {
            Self {
                data: ConfigData::default(),
                path: config_path.clone(),
            }
            .save()?;
        }

        Ok(config_path)
    }

    pub fn save(&self) -> ScrubResult<()> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&self.path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> ScrubResult<()> {
        match key {
            "markers.target" => {
                if value.is_empty() {
                    return Err(invalid(key, value));
                }
                self.data.markers.target = value.to_string();
            }
            "markers.protected" => self.data.markers.protected = split_list(value),
            "strip.strategy" => self.data.strip.strategy = value.parse::<Strategy>()?,
            "strip.files" => self.data.strip.files = split_list(value),
            "strip.discover_root" => self.data.strip.discover_root = value.to_string(),
            "strip.discover_extension" => {
                self.data.strip.discover_extension = value.trim_start_matches('.').to_string();
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        }

        self.save()
    }

    pub fn get(&self, key: &str) -> ScrubResult<String> {
        let value = match key {
            "markers.target" => self.data.markers.target.clone(),
            "markers.protected" => self.data.markers.protected.join(","),
            "strip.strategy" => self.data.strip.strategy.to_string(),
            "strip.files" => self.data.strip.files.join(","),
            "strip.discover_root" => self.data.strip.discover_root.clone(),
            "strip.discover_extension" => self.data.strip.discover_extension.clone(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };

        Ok(value)
    }

    pub fn list(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn invalid(key: &str, value: &str) -> crate::error::ScrubError {
    ConfigError::InvalidValue {
        field: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_DIR).join(CONFIG_FILE),
        }
    }
}
