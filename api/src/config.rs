//! Resolves where the conversion endpoint lives.

use anyhow::Context;
use reqwest::Url;
use thiserror::Error;

use crate::ApiError;

/// The endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Path of the conversion resource, relative to the endpoint base.
pub const CONVERT_PATH: &str = "api/convert";

/// Environment variable naming the endpoint base URL.
pub const ENDPOINT_VAR: &str = "CONVERTER_API_URL";

/// An error that can occur when building a `ConverterConfig`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The value is not an absolute URL.
    #[error("invalid converter endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
    /// The URL cannot carry a path, e.g. `mailto:` or `data:` URLs.
    #[error("converter endpoint {0:?} cannot be used as a base url")]
    NotABase(String),
}

/// Settings for talking to the conversion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    endpoint: Url,
}

impl ConverterConfig {
    /// Builds a config from an endpoint base such as `http://localhost:8080`.
    pub fn from_endpoint(value: &str) -> Result<Self, ConfigError> {
        let mut endpoint = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEndpoint {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(ConfigError::NotABase(value.to_string()));
        }

        // `convert_url` appends CONVERT_PATH directly onto this path.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self { endpoint })
    }

    /// Creates a config from the environment, with the in-code default as fallback.
    ///
    /// # Environment Variables
    /// - `CONVERTER_API_URL`: base URL of the conversion backend. Read at
    ///   runtime on native targets and captured at compile time for every
    ///   target, so wasm builds are configured with
    ///   `CONVERTER_API_URL=... dx build`.
    pub fn from_env() -> Result<Self, ApiError> {
        let configured = runtime_endpoint()
            .or_else(|| option_env!("CONVERTER_API_URL").map(str::to_string))
            .filter(|value| !value.trim().is_empty());

        match configured {
            Some(value) => {
                Self::from_endpoint(&value).with_context(|| format!("reading {ENDPOINT_VAR}"))
            }
            None => Ok(Self::default()),
        }
    }

    /// The full URL of the conversion resource, without query parameters.
    pub fn convert_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        let path = format!("{}{}", self.endpoint.path(), CONVERT_PATH);
        url.set_path(&path);
        url
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::from_endpoint(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid base url")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_endpoint() -> Option<String> {
    std::env::var(ENDPOINT_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_endpoint() -> Option<String> {
    None
}
