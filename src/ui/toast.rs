use crate::app::PortalApp;
use crate::model::Severity;
use egui::{Align2, Color32, Context, RichText};

use super::layout::{ACCENT, DESTRUCTIVE, SUCCESS};

/// How long a toast stays up without being dismissed.
const TOAST_SECONDS: f64 = 6.0;

pub fn show_toast(app: &mut PortalApp, ctx: &Context) {
    let Some(active) = app.toast.as_ref() else {
        return;
    };
    let now = ctx.input(|i| i.time);
    if now - active.shown_at > TOAST_SECONDS {
        app.dismiss_toast();
        return;
    }
    let toast = active.toast.clone();

    let (accent, icon): (Color32, &str) = match toast.severity {
        Severity::Success => (SUCCESS, "✅"),
        Severity::Info => (ACCENT, "ℹ"),
        Severity::Warning => (DESTRUCTIVE, "⚠"),
    };

    let mut dismissed = false;
    egui::Window::new("result_toast")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -56.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(20.0).color(accent));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&toast.title).strong().color(accent));
                    ui.label(&toast.description);
                });
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        });
    if dismissed {
        app.dismiss_toast();
    }

    // Keep repainting while the toast is up so expiry fires without input.
    ctx.request_repaint_after(std::time::Duration::from_millis(250));
}
