//! Version indicator for the menu bar.

use egui::{Response, RichText, Ui};

/// Displays the crate version, dimmed, so a screenshot identifies the build.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.label(RichText::new(concat!("v", env!("CARGO_PKG_VERSION"))).weak())
}
