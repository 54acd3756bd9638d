use crate::constants::{DEFAULT_DATA_FILE, DEFAULT_MARKER_FILE, FEED_URL, LIST_URL};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Resolved configuration with all values filled in (no Options).
///
/// Every field has a concrete default, so the struct can be used directly
/// or deserialized from a TOML file that overrides any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Path of the suffix list data file
    pub data_file: PathBuf,
    /// Path of the last-updated marker file
    pub marker_file: PathBuf,
    /// Commit-history Atom feed used to determine the remote update time
    pub feed_url: String,
    /// Download URL of the suffix list document
    pub list_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            marker_file: PathBuf::from(DEFAULT_MARKER_FILE),
            feed_url: FEED_URL.to_string(),
            list_url: LIST_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Any field missing from the file keeps its default. Unknown keys are
    /// rejected so typos are not silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `InvalidInput` if the
    /// TOML is malformed or contains unknown keys, and whatever
    /// [`ResolvedConfig::validate`] reports for bad field values.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates field values: both endpoint URLs must parse and the
    /// request timeout must be positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Request timeout must be greater than 0".into(),
            ));
        }
        Url::parse(&self.feed_url)?;
        Url::parse(&self.list_url)?;
        Ok(())
    }

    /// Builds the HTTP client used for both the feed and list requests,
    /// with the configured request timeout applied.
    pub fn client(&self) -> AppResult<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()?;
        Ok(client)
    }
}
