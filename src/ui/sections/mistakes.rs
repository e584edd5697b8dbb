use crate::PortalApp;
use crate::ui::layout::{DESTRUCTIVE, SUCCESS, callout_frame, section_frame, section_heading};
use egui::{CollapsingHeader, RichText, Ui};

pub fn ui_mistakes(app: &mut PortalApp, ui: &mut Ui) {
    let section = app.content.mistakes.clone();

    section_frame(ui, |ui| {
        section_heading(ui, &section.icon, &section.title);

        for (i, item) in section.items.iter().enumerate() {
            CollapsingHeader::new(
                RichText::new(format!("{}. {}", i + 1, item.title))
                    .size(16.0)
                    .strong(),
            )
            .id_salt(("mistake", i))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(&item.danger_label)
                            .strong()
                            .color(DESTRUCTIVE),
                    );
                    ui.label(&item.danger);
                });
                ui.add_space(6.0);

                callout_frame(ui, SUCCESS, |ui| {
                    ui.label(RichText::new(&item.advice_label).strong().color(SUCCESS));
                    ui.label(&item.advice);
                });

                ui.add_space(6.0);
                ui.label(RichText::new(&item.footnote).weak().italics());
            });
            ui.add_space(4.0);
        }
    });
}
