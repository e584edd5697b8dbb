mod helpers;
pub mod layout;
pub mod sections;
pub mod toast;

use crate::app::PortalApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{footer_panel, header_panel};

impl App for PortalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        header_panel(self, ctx);
        footer_panel(self, ctx);

        // One scrollable page, sections in reading order
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let max_width = 900.0;
                    let content_width = (ui.available_width() * 0.97).min(max_width);
                    ui.vertical_centered(|ui| {
                        ui.set_width(content_width);
                        ui.add_space(16.0);

                        sections::intro::ui_intro(self, ui);
                        sections::mistakes::ui_mistakes(self, ui);
                        sections::prohibited::ui_prohibited(self, ui);
                        sections::rescuers::ui_rescuers(self, ui);
                        sections::quiz::ui_quiz(self, ui);
                        sections::hotlines::ui_hotlines(self, ui);
                    });
                });
        });

        toast::show_toast(self, ctx);
    }
}
