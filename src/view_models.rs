// src/view_models.rs

use crate::model::OptionFeedback;

/// One quiz question ready for rendering.
#[derive(Clone, Debug)]
pub struct QuestionCard {
    pub id: u32,
    pub number: usize, // 1-based badge on the card
    pub prompt: String,
    pub options: Vec<OptionRow>,
}

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub index: usize,
    pub text: String,
    pub selected: bool,
    pub feedback: OptionFeedback,
}

/// Everything the quiz footer needs to draw its controls.
#[derive(Clone, Copy, Debug)]
pub struct QuizControls {
    pub answered: usize,
    pub total: usize,
    pub can_submit: bool,
    pub results_shown: bool,
}

impl QuizControls {
    pub fn progress_label(&self) -> String {
        format!("Отвечено: {} из {}", self.answered, self.total)
    }
}
