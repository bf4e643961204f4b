//! Runtime configuration.
//!
//! Built from the environment with [`FormsConfig::from_env`] and then
//! overridden by CLI flags through the builder methods.

use std::path::PathBuf;
use std::time::Duration;

/// Backend used when `FORMWIZ_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
/// Filter applied when `FORMWIZ_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "formwiz=info";

pub const ENV_API_URL: &str = "FORMWIZ_API_URL";
pub const ENV_HTTP_TIMEOUT: &str = "FORMWIZ_HTTP_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "FORMWIZ_LOG_DIR";
pub const ENV_LOG_FILTER: &str = "FORMWIZ_LOG";

/// Configuration for one wizard run.
///
/// ```ignore
/// use formwiz::startup::FormsConfig;
///
/// let config = FormsConfig::from_env().with_api_url("https://club.example/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormsConfig {
    /// Base URL of the forms API, without trailing slash
    pub api_url: String,
    /// Per-request timeout; `None` leaves reqwest's default
    pub http_timeout: Option<Duration>,
    /// Directory for the log file; `None` uses the data directory
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directive string
    pub log_filter: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: None,
            log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FormsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Read the `FORMWIZ_*` variables. Blank or unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_blank_var(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(secs) = non_blank_var(ENV_HTTP_TIMEOUT) {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_http_timeout(Duration::from_secs(secs)),
                _ => eprintln!("Ignoring invalid {}={}", ENV_HTTP_TIMEOUT, secs),
            }
        }
        if let Some(dir) = non_blank_var(ENV_LOG_DIR) {
            config = config.with_log_dir(dir);
        }
        if let Some(filter) = non_blank_var(ENV_LOG_FILTER) {
            config = config.with_log_filter(filter);
        }

        config
    }

    /// Where the log file goes: `log_dir`, else `<data dir>/formwiz`.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("formwiz")))
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
