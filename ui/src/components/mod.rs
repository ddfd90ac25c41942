//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, form fields and page chrome.
pub mod branding;
pub mod currency_select;
pub mod pico;
