use crate::PortalApp;
use crate::model::OptionFeedback;
use crate::ui::helpers::numbered_badge;
use crate::ui::layout::{ACCENT, DESTRUCTIVE, SUCCESS, section_frame, section_heading};
use egui::{Button, Color32, Frame, Margin, RichText, Ui};

pub fn ui_quiz(app: &mut PortalApp, ui: &mut Ui) {
    let text = app.content.quiz.clone();
    let cards = app.question_cards();
    let controls = app.quiz_controls();

    section_frame(ui, |ui| {
        section_heading(ui, &text.icon, &text.title);
        ui.label(RichText::new(&text.card_title).size(18.0).strong());
        ui.label(RichText::new(&text.card_subtitle).weak());
        ui.add_space(12.0);

        for card in &cards {
            ui.horizontal_wrapped(|ui| {
                numbered_badge(ui, card.number, ACCENT);
                ui.label(RichText::new(&card.prompt).size(15.0).strong());
            });
            ui.add_space(4.0);

            for row in &card.options {
                // Row tint and trailing icon come straight from the derived
                // classification; nothing is decided here.
                let (fill, trailing) = match row.feedback {
                    OptionFeedback::Correct => {
                        (SUCCESS.gamma_multiply(0.15), Some(("✅", SUCCESS)))
                    }
                    OptionFeedback::IncorrectSelected => {
                        (DESTRUCTIVE.gamma_multiply(0.15), Some(("❌", DESTRUCTIVE)))
                    }
                    OptionFeedback::Neutral => (Color32::TRANSPARENT, None),
                };

                Frame::default()
                    .fill(fill)
                    .corner_radius(4)
                    .inner_margin(Margin::symmetric(8, 4))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let radio = ui.add_enabled(
                                !controls.results_shown,
                                egui::RadioButton::new(row.selected, &row.text),
                            );
                            if radio.clicked() {
                                app.answer_selected(card.id, row.index);
                            }
                            if let Some((icon, color)) = trailing {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(RichText::new(icon).color(color));
                                    },
                                );
                            }
                        });
                    });
            }

            if card.number < cards.len() {
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);
            }
        }

        ui.add_space(12.0);

        // Submit while answering, retake once graded.
        if !controls.results_shown {
            ui.horizontal(|ui| {
                let submit = ui
                    .add_enabled(
                        controls.can_submit,
                        Button::new("📤 Проверить ответы").min_size(egui::vec2(220.0, 36.0)),
                    )
                    .on_disabled_hover_text("Сначала ответьте на все вопросы");
                if submit.clicked() {
                    let now = ui.input(|i| i.time);
                    app.submit_quiz(now);
                }
                ui.add_space(8.0);
                ui.label(RichText::new(controls.progress_label()).weak());
            });
        } else if ui
            .add(Button::new("🔄 Пройти заново").min_size(egui::vec2(180.0, 36.0)))
            .clicked()
        {
            app.reset_quiz();
        }
    });
}
