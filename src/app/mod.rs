use crate::data::{read_content_embedded, read_questions_embedded};
use crate::model::{PortalContent, Question, Toast};
use crate::quiz::QuizState;
use egui_commonmark::CommonMarkCache;

// Submodules
pub mod actions;
pub mod queries;
pub mod view_models;

// Re-export of the view models
pub use crate::view_models::{OptionRow, QuestionCard, QuizControls};

/// A raised toast plus the UI clock time it appeared at, so the overlay
/// can expire it.
pub struct ActiveToast {
    pub toast: Toast,
    pub shown_at: f64,
}

pub struct PortalApp {
    pub content: PortalContent,
    pub questions: Vec<Question>,
    pub quiz: QuizState,
    pub toast: Option<ActiveToast>,
    pub cm_cache: CommonMarkCache,
}

impl PortalApp {
    pub fn new() -> Self {
        let questions = read_questions_embedded();
        let content = read_content_embedded();
        log::info!("portal content loaded, {} quiz questions", questions.len());

        Self {
            content,
            questions,
            quiz: QuizState::new(),
            toast: None,
            cm_cache: CommonMarkCache::default(),
        }
    }
}

impl Default for PortalApp {
    fn default() -> Self {
        Self::new()
    }
}
