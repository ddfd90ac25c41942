//! Defines the currencies offered by the converter form.

use serde::Serialize;

/// A currency the converter can request, identified by its ISO 4217 code.
///
/// Declaration order is the display order of the selectors.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    ETB, // Ethiopian Birr
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    CNY, // Chinese Yuan
    JPY, // Japanese Yen
    CAD, // Canadian Dollar
}

/// The single ordered sequence both currency selectors are built from.
pub const SUPPORTED_CURRENCIES: [Currency; 7] = [
    Currency::ETB,
    Currency::USD,
    Currency::EUR,
    Currency::GBP,
    Currency::CNY,
    Currency::JPY,
    Currency::CAD,
];

impl Currency {
    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ETB => "Ethiopian Birr",
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::CNY => "Chinese Yuan",
            Self::JPY => "Japanese Yen",
            Self::CAD => "Canadian Dollar",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn supported_sequence_matches_declaration_order() {
        let declared: Vec<Currency> = Currency::iter().collect();
        assert_eq!(declared, SUPPORTED_CURRENCIES.to_vec());

        let codes: Vec<&str> = SUPPORTED_CURRENCIES.iter().map(Currency::code).collect();
        assert_eq!(codes, ["ETB", "USD", "EUR", "GBP", "CNY", "JPY", "CAD"]);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::from_str("usd"), Ok(Currency::USD));
        assert_eq!(Currency::from_str("Etb"), Ok(Currency::ETB));
        assert!(Currency::from_str("XAU").is_err());
    }

    #[test]
    fn serializes_as_bare_code() {
        let json = serde_json::to_string(&Currency::JPY).unwrap();
        assert_eq!(json, "\"JPY\"");
        assert_eq!(Currency::CAD.to_string(), "CAD");
    }
}
