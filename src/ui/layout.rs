use crate::PortalApp;
use egui::{Color32, Context, Frame, Margin, RichText, Stroke, Ui, Visuals};

// Page palette, matching the portal's warning/advice/accent roles.
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(201, 60, 60);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
pub const ACCENT: Color32 = Color32::from_rgb(9, 105, 218);

pub fn header_panel(app: &PortalApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("⚠ {}", app.content.header.title))
                    .size(28.0)
                    .strong(),
            );
            ui.label(RichText::new(&app.content.header.subtitle).weak());
        });
        ui.add_space(10.0);
    });
}

pub fn footer_panel(app: &PortalApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            for line in &app.content.footer.lines {
                ui.label(RichText::new(line).weak());
            }
        });

        // ----------- THEME BUTTONS -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Тёмная тема").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Светлая тема").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
        ui.add_space(6.0);
    });
}

/// Card-like frame shared by every page section.
pub fn section_frame(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .fill(ui.visuals().window_fill())
        .inner_margin(Margin::symmetric(16, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
    ui.add_space(24.0);
}

pub fn section_heading(ui: &mut Ui, icon: &str, title: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(24.0));
        ui.label(RichText::new(title).size(24.0).strong());
    });
    ui.add_space(8.0);
}

/// Tinted block for warnings, advice and info notes.
pub fn callout_frame(ui: &mut Ui, accent: Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(accent.gamma_multiply(0.12))
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.35)))
        .corner_radius(6)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}
