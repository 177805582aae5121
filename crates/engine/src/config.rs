//! Replay configuration via `replay.toml`
//!
//! A missing file means defaults. To change settings, edit the file
//! and reopen the reconstructor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use cmdreplay_codec::TagPolicy;
use cmdreplay_core::{ReplayError, ReplayResult};

/// Config file name placed next to the recordings.
pub const CONFIG_FILE_NAME: &str = "replay.toml";

/// Replay configuration loaded from `replay.toml`.
///
/// # Example
///
/// ```toml
/// # "strict" (default) or "lenient"
/// tag_policy = "strict"
/// log_swallowed_errors = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Tagged-sequence policy: `"strict"` or `"lenient"`.
    #[serde(default = "default_tag_policy_str")]
    pub tag_policy: String,
    /// Warn when a value-form call falls back to a zero value.
    #[serde(default = "default_log_swallowed")]
    pub log_swallowed_errors: bool,
}

fn default_tag_policy_str() -> String {
    "strict".to_string()
}

fn default_log_swallowed() -> bool {
    true
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            tag_policy: default_tag_policy_str(),
            log_swallowed_errors: default_log_swallowed(),
        }
    }
}

impl ReplayConfig {
    /// Parse the tag policy string into a `TagPolicy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"strict"` or `"lenient"`.
    pub fn tag_policy(&self) -> ReplayResult<TagPolicy> {
        TagPolicy::parse(&self.tag_policy).ok_or_else(|| {
            ReplayError::config(format!(
                "Invalid tag_policy '{}' in replay.toml. Expected \"strict\" or \"lenient\".",
                self.tag_policy
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Replay decoder configuration
#
# How tagged sequences treat elements they cannot decode:
#   "strict"  = an unknown tag or a bad element fails the whole sequence
#   "lenient" = bad elements are skipped and counted
tag_policy = "strict"

# Warn when a value-form call falls back to a zero value (default: true)
log_swallowed_errors = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or the tag policy is invalid.
    pub fn from_toml_str(content: &str) -> ReplayResult<Self> {
        let config: ReplayConfig = toml::from_str(content)
            .map_err(|e| ReplayError::config(format!("Failed to parse config: {}", e)))?;
        config.tag_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> ReplayResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReplayError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ReplayConfig = toml::from_str(&content).map_err(|e| {
            ReplayError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the policy value eagerly
        config.tag_policy()?;
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> ReplayResult<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ReplayResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                ReplayError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ReplayResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ReplayError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            ReplayError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
