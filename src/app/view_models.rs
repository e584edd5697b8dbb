use super::*;

impl PortalApp {
    /// Builds one render-ready card per question, selection and feedback
    /// already resolved so the view stays declarative.
    pub fn question_cards(&self) -> Vec<QuestionCard> {
        self.questions
            .iter()
            .enumerate()
            .map(|(qi, q)| QuestionCard {
                id: q.id,
                number: qi + 1,
                prompt: q.prompt.clone(),
                options: q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(oi, text)| OptionRow {
                        index: oi,
                        text: text.clone(),
                        selected: self.quiz.selected(q.id) == Some(oi),
                        feedback: self.quiz.option_feedback(q, oi),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn quiz_controls(&self) -> QuizControls {
        QuizControls {
            answered: self.answered_count(),
            total: self.questions.len(),
            can_submit: self.can_submit(),
            results_shown: self.results_shown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::PortalApp;
    use crate::model::OptionFeedback;

    #[test]
    fn cards_reflect_selection_and_feedback_after_submit() {
        let mut app = PortalApp::new();
        let key: Vec<(u32, usize)> = app
            .questions
            .iter()
            .map(|q| (q.id, q.correct))
            .collect();

        // Answer the first question wrong, the rest right.
        for (i, (id, correct)) in key.iter().enumerate() {
            let pick = if i == 0 { (correct + 1) % 4 } else { *correct };
            app.answer_selected(*id, pick);
        }
        assert!(app.quiz_controls().can_submit);
        app.submit_quiz(0.0);

        let cards = app.question_cards();
        let first = &cards[0];
        let wrong_pick = (key[0].1 + 1) % 4;
        assert!(first.options[wrong_pick].selected);
        assert_eq!(
            first.options[wrong_pick].feedback,
            OptionFeedback::IncorrectSelected
        );
        assert_eq!(first.options[key[0].1].feedback, OptionFeedback::Correct);

        let controls = app.quiz_controls();
        assert!(controls.results_shown);
        assert!(!controls.can_submit);
        assert!(app.toast.is_some());
    }
}
