//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use api::Currency;
use api::HttpConversionClient;
use dioxus::prelude::*;

use crate::components::currency_select::CurrencySelect;
use crate::components::pico::{Button, ButtonKind, Card, Grid, Input};
use crate::converter_state::FieldEdit;
use crate::hooks::use_converter::{use_converter, Converter};

#[component]
pub fn ConverterScreen() -> Element {
    let client = use_context::<HttpConversionClient>();
    let mut converter = use_converter();

    rsx! {
        ConverterForm {
            converter,
            on_submit: move |_| converter.submit(client.clone()),
        }
    }
}

/// The form, its submit control and the error/result regions, driven by
/// `converter`. Submitting only calls `on_submit`; the caller picks the client.
#[component]
pub fn ConverterForm(mut converter: Converter, on_submit: EventHandler<()>) -> Element {
    let (form, result, error, is_loading, submit_label) = {
        let state = converter.state();
        let s = state.read();
        (
            s.form().clone(),
            s.result().to_string(),
            s.error().to_string(),
            s.is_loading(),
            s.submit_label(),
        )
    };

    rsx! {
        Card {
            h2 { "International Currency Converter" }
            form {
                class: "converter-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    on_submit.call(());
                },
                Grid {
                    Input {
                        label: "Amount:",
                        name: "amount",
                        input_type: "number",
                        step: "any",
                        required: true,
                        value: form.amount.clone(),
                        on_input: move |evt: FormEvent| converter.edit(FieldEdit::Amount(evt.value())),
                    }
                    CurrencySelect {
                        label: "From:",
                        name: "from",
                        selected: form.from,
                        on_change: move |currency: Currency| converter.edit(FieldEdit::From(currency)),
                    }
                    CurrencySelect {
                        label: "To:",
                        name: "to",
                        selected: form.to,
                        on_change: move |currency: Currency| converter.edit(FieldEdit::To(currency)),
                    }
                }
                Button {
                    kind: ButtonKind::Submit,
                    disabled: is_loading,
                    busy: is_loading,
                    "{submit_label}"
                }
            }

            if !error.is_empty() {
                p {
                    class: "error-message",
                    role: "alert",
                    style: "color: var(--pico-del-color);",
                    "{error}"
                }
            }
            if !result.is_empty() {
                p {
                    class: "result-display",
                    style: "font-size: 1.25rem; font-weight: bold;",
                    "{result}"
                }
            }
        }
    }
}
