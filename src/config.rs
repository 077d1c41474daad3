//! Application configuration for the task screens and the REST contract.
//!
//! Every section has defaults matching the generated application, so an
//! empty JSON object is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use task_app::config::TaskAppConfig;
//!
//! let config = TaskAppConfig::from_json_str(r#"{"api":{"defaultPageSize":50}}"#)
//!     .expect("valid configuration");
//! assert_eq!(config.api.default_page_size, 50);
//! assert_eq!(config.form.description_max_length, 200);
//! ```

use crate::task::domain::TaskDescription;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A value is outside its accepted range.
    #[error("invalid configuration value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskAppConfig {
    /// Form validation and default settings.
    pub form: TaskFormConfig,
    /// REST contract settings.
    pub api: ApiConfig,
}

impl TaskAppConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for invalid JSON and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.form.validate()?;
        self.api.validate()
    }
}

/// Settings for the task form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFormConfig {
    /// Maximum description length in characters.
    pub description_max_length: usize,
    /// Whether new tasks get "now" as their target date.
    pub default_target_date_to_now: bool,
}

impl Default for TaskFormConfig {
    fn default() -> Self {
        Self {
            description_max_length: TaskDescription::MAX_LENGTH,
            default_target_date_to_now: true,
        }
    }
}

impl TaskFormConfig {
    /// Configuration that leaves the target date of new tasks empty.
    #[must_use]
    pub fn without_target_date_default() -> Self {
        Self {
            default_target_date_to_now: false,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.description_max_length == 0 {
            return Err(ConfigError::Invalid {
                field: "form.descriptionMaxLength",
                reason: "must be positive".to_owned(),
            });
        }
        if self.description_max_length > TaskDescription::MAX_LENGTH {
            return Err(ConfigError::Invalid {
                field: "form.descriptionMaxLength",
                reason: format!(
                    "must not exceed the stored limit of {}",
                    TaskDescription::MAX_LENGTH
                ),
            });
        }
        Ok(())
    }
}

/// Settings for the `/api/tasks` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// Scheme and authority used in generated links.
    pub base_url: String,
    /// Path of the task collection resource.
    pub resource_path: String,
    /// Page size used when a request does not specify one.
    pub default_page_size: u32,
    /// Upper bound applied to requested page sizes.
    pub max_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_owned(),
            resource_path: "/api/tasks".to_owned(),
            default_page_size: 20,
            max_page_size: 2000,
        }
    }
}

impl ApiConfig {
    /// Returns the absolute URL of the collection resource.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.resource_path
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.resource_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "api.resourcePath",
                reason: "must start with '/'".to_owned(),
            });
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "api.defaultPageSize",
                reason: "must be positive".to_owned(),
            });
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::Invalid {
                field: "api.maxPageSize",
                reason: format!(
                    "must be at least the default page size {}",
                    self.default_page_size
                ),
            });
        }
        Ok(())
    }
}
