use crate::{ConfigError, RequestOptions};
use serde::{Deserialize, Serialize};

/// The resource every submission is posted to.
pub const DEFAULT_SUBMIT_URL: &str = "http://localhost:5000/api/user/1";

/// The content type declared on every submission.
///
/// The body is always encoded as `multipart/form-data`. The receiving server's
/// expectations are unknown, so the declared type is sent as-is.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Where and how the form is submitted.
///
/// Every field is optional in the TOML source and defaults to the fixed call shape:
///
/// ```toml
/// url = "http://localhost:5000/api/user/1"
/// content_type = "application/json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// The URL the payload is posted to.
    pub url: String,

    /// The value of the `Content-Type` header sent with the payload.
    pub content_type: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SUBMIT_URL.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl SubmitConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        Ok(config)
    }

    /// The request options attached to every submission.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::new().with_header("Content-Type", self.content_type.as_str())
    }
}
