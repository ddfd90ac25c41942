// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod converter_state;
pub mod hooks;
mod screens;

use api::ConverterConfig;
use api::HttpConversionClient;
use components::branding::SiteFooter;
use components::branding::SiteHeader;
use components::pico::Container;
use screens::converter::ConverterScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    /* --- HEADER --- */
    .main-header { padding: 1rem; border-bottom: 1px solid var(--pico-muted-border-color); }
    .header-content { display: flex; align-items: center; gap: 1rem; }
    .header-content .logo { width: 64px; height: 64px; object-fit: contain; }
    .header-titles { margin: 0; }
    .header-titles h1 { margin-bottom: 0.25rem; font-size: 1.5rem; }
    .slogan { color: var(--pico-muted-color); }

    /* --- CONVERTER --- */
    .converter-form button[type="submit"] { width: 100%; }

    /* --- FOOTER --- */
    .footer { padding: 1rem; border-top: 1px solid var(--pico-muted-border-color); text-align: center; }
    .footer-content { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; }
    .footer-links a { margin-left: 1rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{page_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // The client is the converter's only way out to the network; screens
    // pick it up from context.
    use_context_provider(|| {
        let config = ConverterConfig::from_env().unwrap_or_else(|e| {
            dioxus_logger::tracing::warn!("{:#}; using default endpoint", e);
            ConverterConfig::default()
        });
        dioxus_logger::tracing::info!("conversion endpoint: {}", config.convert_url());
        HttpConversionClient::new(config)
    });

    rsx! {
        SiteHeader {}
        Container {
            ConverterScreen {}
        }
        SiteFooter {}
    }
}
