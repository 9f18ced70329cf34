pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

use crate::stripper::markers::{DEFAULT_PROTECTED, DEFAULT_TARGET};
use crate::stripper::Strategy;
use crate::targets::{DEFAULT_DISCOVER_EXTENSION, DEFAULT_DISCOVER_ROOT, DEFAULT_FILES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigData {
    pub version: String,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub strip: StripConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub target: String,
    pub protected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub strategy: Strategy,
    pub files: Vec<String>,
    pub discover_root: String,
    pub discover_extension: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            protected: DEFAULT_PROTECTED.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            discover_root: DEFAULT_DISCOVER_ROOT.to_string(),
            discover_extension: DEFAULT_DISCOVER_EXTENSION.to_string(),
        }
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            markers: MarkerConfig::default(),
            strip: StripConfig::default(),
        }
    }
}
