use super::*;
use crate::model::OptionFeedback;

impl PortalApp {
    pub fn can_submit(&self) -> bool {
        self.quiz.can_submit(&self.questions)
    }

    pub fn results_shown(&self) -> bool {
        self.quiz.results_shown()
    }

    pub fn answered_count(&self) -> usize {
        self.quiz.answered_count()
    }

    pub fn option_feedback(&self, question: &Question, option_index: usize) -> OptionFeedback {
        self.quiz.option_feedback(question, option_index)
    }
}
