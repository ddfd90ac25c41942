// ui/src/components/currency_select.rs
#![allow(non_snake_case)]

use std::str::FromStr;

use api::Currency;
use api::SUPPORTED_CURRENCIES;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    pub label: String,
    /// Form field name, also used as the element id.
    pub name: String,
    pub selected: Currency,
    pub on_change: EventHandler<Currency>,
}

/// A labeled `<select>` over the supported currencies.
///
/// Options are the currency codes; the full name is shown as a tooltip.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    let selected_code = props.selected.code();

    rsx! {
        label {
            r#for: "{props.name}",
            "{props.label}"
            select {
                id: "{props.name}",
                name: "{props.name}",
                value: "{selected_code}",
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    match Currency::from_str(&value) {
                        Ok(currency) => props.on_change.call(currency),
                        Err(_) => dioxus_logger::tracing::warn!("ignoring unknown currency {:?}", value),
                    }
                },
                for currency in SUPPORTED_CURRENCIES {
                    option {
                        key: "{currency.code()}",
                        value: "{currency.code()}",
                        title: "{currency.name()}",
                        selected: currency == props.selected,
                        "{currency.code()}"
                    }
                }
            }
        }
    }
}
