use crate::PortalApp;
use crate::ui::helpers::stat_tile;
use crate::ui::layout::{DESTRUCTIVE, callout_frame, section_frame, section_heading};
use egui::{RichText, Ui};
use egui_commonmark::CommonMarkViewer;

pub fn ui_intro(app: &mut PortalApp, ui: &mut Ui) {
    // Clone the copy up front: the markdown viewer needs cm_cache mutably.
    let section = app.content.intro.clone();

    section_frame(ui, |ui| {
        section_heading(ui, &section.icon, &section.title);

        CommonMarkViewer::new().show(ui, &mut app.cm_cache, &section.lead);
        ui.add_space(10.0);

        callout_frame(ui, DESTRUCTIVE, |ui| {
            ui.label(
                RichText::new(&section.callout.label)
                    .strong()
                    .color(DESTRUCTIVE),
            );
            ui.label(&section.callout.text);
        });

        ui.add_space(12.0);
        ui.columns(section.stats.len(), |cols| {
            for (col, stat) in cols.iter_mut().zip(&section.stats) {
                stat_tile(col, &stat.icon, &stat.value, &stat.caption);
            }
        });
    });
}
