use crate::PortalApp;
use crate::ui::layout::{DESTRUCTIVE, section_frame};
use egui::{RichText, Ui};

pub fn ui_hotlines(app: &mut PortalApp, ui: &mut Ui) {
    let section = app.content.hotlines.clone();

    section_frame(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&section.icon).size(32.0).color(DESTRUCTIVE));
            ui.label(RichText::new(&section.title).size(22.0).strong());
        });
        ui.add_space(10.0);

        ui.columns(section.numbers.len(), |cols| {
            for (col, line) in cols.iter_mut().zip(&section.numbers) {
                col.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&line.number)
                            .size(26.0)
                            .strong()
                            .color(DESTRUCTIVE),
                    );
                    ui.label(RichText::new(&line.label).weak());
                });
            }
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&section.advice).weak());
        });
    });
}
