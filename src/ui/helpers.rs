// src/ui/helpers.rs
use egui::{Align2, Color32, FontId, RichText, Sense, Ui};

use super::layout::{ACCENT, DESTRUCTIVE};

pub fn stat_tile(ui: &mut Ui, icon: &str, value: &str, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(22.0));
        ui.label(RichText::new(value).size(20.0).strong().color(ACCENT));
        ui.label(RichText::new(caption).weak());
    });
}

/// Small filled circle with a 1-based number, used by step lists and
/// question cards.
pub fn numbered_badge(ui: &mut Ui, number: usize, fill: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), Sense::hover());
    ui.painter().circle_filled(rect.center(), 11.0, fill);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(13.0),
        Color32::WHITE,
    );
}

/// One "this is forbidden" list row.
pub fn cross_item(ui: &mut Ui, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("✗").strong().color(DESTRUCTIVE));
        ui.label(text);
    });
}
