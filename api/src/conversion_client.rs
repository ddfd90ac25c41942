//! Defines the conversion capability and its HTTP implementation.

use thiserror::Error;

use crate::conversion_request::ConversionRequest;

/// Why a conversion lookup did not produce a number.
///
/// The form surfaces every variant the same way; the distinction exists for logs.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("conversion request did not complete: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-2xx status.
    #[error("conversion endpoint answered with status {0}")]
    Status(u16),
    /// The body was not a single finite number.
    #[error("conversion endpoint returned an unusable body: {0}")]
    MalformedBody(String),
}

/// A trait for any service that can convert an amount between two currencies.
#[allow(
    async_fn_in_trait,
    reason = "futures are polled on the single-threaded UI runtime, so no `Send` bound"
)]
pub trait ConversionClient {
    /// Converts `request.amount` from `request.from` into `request.to`.
    async fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError>;
}

/// Decodes a response body holding a bare JSON number, e.g. `5650000.0`.
pub fn parse_conversion_body(body: &str) -> Result<f64, ConversionError> {
    let value: f64 = serde_json::from_str(body.trim())
        .map_err(|e| ConversionError::MalformedBody(e.to_string()))?;
    if !value.is_finite() {
        return Err(ConversionError::MalformedBody(format!(
            "non-finite value {value}"
        )));
    }
    Ok(value)
}

/// Talks to the conversion backend over HTTP.
pub mod http {
    use reqwest::RequestBuilder;
    use reqwest::Url;

    use super::*;
    use crate::config::ConverterConfig;

    /// An implementation of `ConversionClient` that issues
    /// `GET <endpoint>/api/convert?amount=..&from=..&to=..`.
    ///
    /// No timeout is configured; a request waits until the transport settles.
    #[derive(Debug, Clone, Default)]
    pub struct HttpConversionClient {
        client: reqwest::Client,
        config: ConverterConfig,
    }

    impl HttpConversionClient {
        pub fn new(config: ConverterConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }

        /// The GET for `request`, with its fields serialized into the query string.
        fn get(&self, request: &ConversionRequest) -> RequestBuilder {
            self.client.get(self.config.convert_url()).query(request)
        }

        /// Builds the full request URL, query string included.
        pub fn request_url(&self, request: &ConversionRequest) -> Result<Url, ConversionError> {
            Ok(self.get(request).build()?.url().clone())
        }
    }

    impl ConversionClient for HttpConversionClient {
        async fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
            let http_request = self.get(request).build()?;
            dioxus_logger::tracing::debug!("GET {}", http_request.url());

            let resp = self.client.execute(http_request).await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(ConversionError::Status(status.as_u16()));
            }

            let body = resp.text().await?;
            parse_conversion_body(&body)
        }
    }
}
