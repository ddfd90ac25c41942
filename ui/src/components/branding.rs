// File: src/components/branding.rs
//
// Static page chrome. Nothing here reacts to converter state.
use dioxus::prelude::*;

const ORGANIZATION: &str = "Development Bank of Ethiopia";
const SLOGAN: &str = "Your Development Partner!";
const LOGO_URL: &str = "https://tse1.mm.bing.net/th/id/OIP.4IejVhnSMEcsFRO1N9vp9QHaHa?r=0&rs=1&pid=ImgDetMain&o=7&rm=3";

const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "https://dbe.com.et/?page_id=6885"),
    ("Terms of Service", "https://dbe.com.et/?stm_works=terms-and-tariffs#"),
    ("Contact Us", "https://dbe.com.et/?page_id=6598"),
];

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "main-header",
            div {
                class: "header-content",
                img {
                    class: "logo",
                    src: LOGO_URL,
                    alt: "DBE Logo",
                }
                hgroup {
                    class: "header-titles",
                    h1 { "{ORGANIZATION}" }
                    p { class: "slogan", "{SLOGAN}" }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-content",
                p { class: "footer-logo", "{ORGANIZATION}" }
                nav {
                    class: "footer-links",
                    for (label, href) in FOOTER_LINKS {
                        a { key: "{label}", href: href, "{label}" }
                    }
                }
            }
            small {
                class: "copyright",
                "© 2025 {ORGANIZATION}. All rights reserved."
            }
        }
    }
}
