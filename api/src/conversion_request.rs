//! The query sent to the conversion endpoint.

use serde::Serialize;

use crate::converted_amount::ConvertedAmount;
use crate::currency::Currency;

/// One conversion lookup: an amount in `from` to be expressed in `to`.
///
/// Serializes to the endpoint's query parameters: `amount`, `from`, `to`,
/// with currencies as their bare codes.
/// `amount` is forwarded exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl ConversionRequest {
    pub fn new(amount: impl Into<String>, from: Currency, to: Currency) -> Self {
        Self {
            amount: amount.into(),
            from,
            to,
        }
    }

    /// Renders the summary line for a successful lookup,
    /// e.g. `100 USD = 5,650,000 ETB`.
    pub fn describe_result(&self, converted: f64) -> String {
        let converted = ConvertedAmount::new_from_float(converted, self.to);
        format!(
            "{} {} = {}",
            self.amount,
            self.from.code(),
            converted.to_string_with_code()
        )
    }
}
