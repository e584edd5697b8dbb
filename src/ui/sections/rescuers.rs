use crate::PortalApp;
use crate::model::RescuerStep;
use crate::ui::helpers::numbered_badge;
use crate::ui::layout::{ACCENT, callout_frame, section_frame, section_heading};
use egui::{RichText, Ui};

pub fn ui_rescuers(app: &mut PortalApp, ui: &mut Ui) {
    let section = app.content.rescuers.clone();

    section_frame(ui, |ui| {
        section_heading(ui, &section.icon, &section.title);
        ui.label(RichText::new(&section.card_title).size(18.0).strong());
        ui.label(RichText::new(&section.card_subtitle).weak());
        ui.add_space(10.0);

        // Two columns, numbered down each column like the source layout.
        let half = section.steps.len().div_ceil(2);
        ui.columns(2, |cols| {
            for (i, step) in section.steps.iter().enumerate() {
                step_row(&mut cols[i / half], i + 1, step);
            }
        });

        ui.add_space(8.0);
        callout_frame(ui, ACCENT, |ui| {
            ui.label(
                RichText::new(format!("ℹ {}", section.callout.title))
                    .size(15.0)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.label(&section.callout.body);
            ui.add_space(4.0);
            ui.label(
                RichText::new(&section.callout.emphasis)
                    .strong()
                    .color(ACCENT),
            );
        });
    });
}

fn step_row(ui: &mut Ui, number: usize, step: &RescuerStep) {
    ui.horizontal(|ui| {
        numbered_badge(ui, number, ACCENT);
        ui.vertical(|ui| {
            ui.label(RichText::new(&step.title).strong());
            ui.label(RichText::new(&step.text).weak());
        });
    });
    ui.add_space(8.0);
}
