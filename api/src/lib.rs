//! Shared, UI-free types for the currency converter: currencies, the
//! conversion request, the HTTP client for the conversion endpoint and its
//! configuration.

pub mod config;
pub mod conversion_client;
pub mod conversion_request;
pub mod converted_amount;
pub mod currency;

pub use config::ConverterConfig;
pub use conversion_client::http::HttpConversionClient;
pub use conversion_client::ConversionClient;
pub use conversion_client::ConversionError;
pub use conversion_request::ConversionRequest;
pub use currency::Currency;
pub use currency::SUPPORTED_CURRENCIES;

pub type ApiError = anyhow::Error;
