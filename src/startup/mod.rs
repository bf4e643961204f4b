//! Startup plumbing: configuration and logging, run before the terminal is
//! taken over.
//!
//! - [`config`] - `FormsConfig` from the environment plus CLI overrides
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::FormsConfig;
pub use logging::init_logging;

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::client::FormsClient;
use crate::traits::HttpError;

/// Build the production API client for `config`.
pub fn build_client(config: &FormsConfig) -> Result<FormsClient, HttpError> {
    let http = match config.http_timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
        None => ReqwestHttpClient::new(),
    };
    Ok(FormsClient::new(config.api_url.clone(), Arc::new(http)))
}
