//! Native entry point: the converter page hosted in a desktop webview.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let window = WindowBuilder::new()
        .with_title("Currency Converter")
        .with_inner_size(LogicalSize::new(720.0, 860.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
