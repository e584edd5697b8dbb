use crate::PortalApp;
use crate::ui::helpers::cross_item;
use crate::ui::layout::{DESTRUCTIVE, callout_frame, section_frame, section_heading};
use egui::{RichText, Ui};

pub fn ui_prohibited(app: &mut PortalApp, ui: &mut Ui) {
    let section = app.content.prohibited.clone();

    section_frame(ui, |ui| {
        section_heading(ui, &section.icon, &section.title);

        ui.columns(section.cards.len(), |cols| {
            for (col, card) in cols.iter_mut().zip(&section.cards) {
                callout_frame(col, DESTRUCTIVE, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&card.icon).size(18.0));
                        ui.label(RichText::new(&card.title).size(16.0).strong());
                    });
                    ui.add_space(6.0);
                    for item in &card.items {
                        cross_item(ui, item);
                        ui.add_space(2.0);
                    }
                });
            }
        });
    });
}
