use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "photocat-release.toml";

/// Represents the complete configuration for photocat-release.
///
/// Every field has a compiled default reproducing the stock release
/// behavior, so the configuration file is optional.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

fn default_artifact_id() -> String {
    "photocat".to_string()
}

fn default_tag_format() -> String {
    "photocat-{version}".to_string()
}

fn default_commit_format() -> String {
    "version {version}".to_string()
}

/// Project identity and naming patterns.
///
/// `{version}` in the format strings is replaced with the version being
/// processed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,

    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_commit_format")]
    pub commit_format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            artifact_id: default_artifact_id(),
            tag_format: default_tag_format(),
            commit_format: default_commit_format(),
        }
    }
}

impl ProjectConfig {
    /// Tag name for a release version.
    pub fn tag_name(&self, version: &str) -> String {
        self.tag_format.replace("{version}", version)
    }

    /// Commit message for a version change.
    pub fn commit_message(&self, version: &str) -> String {
        self.commit_format.replace("{version}", version)
    }
}

fn default_maven_binary() -> String {
    "mvn".to_string()
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_quiet() -> bool {
    true
}

/// External tool invocation settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_maven_binary")]
    pub maven: String,

    #[serde(default = "default_git_binary")]
    pub git: String,

    #[serde(default = "default_quiet")]
    pub quiet: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            maven: default_maven_binary(),
            git: default_git_binary(),
            quiet: default_quiet(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `photocat-release.toml` in the current directory
/// 3. `.photocat-release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| ReleaseError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new(CONFIG_FILE).exists() {
        fs::read_to_string(CONFIG_FILE)
            .map_err(|e| ReleaseError::config(format!("cannot read '{}': {}", CONFIG_FILE, e)))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".photocat-release.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                ReleaseError::config(format!("cannot read '{}': {}", config_path.display(), e))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("invalid configuration: {}", e)))
}
