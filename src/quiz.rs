use std::collections::HashMap;

use crate::model::{OptionFeedback, Question, Severity, Toast};

/// Live quiz state: one pick per question plus the results flag.
///
/// The question bank itself is immutable and owned by the app; this struct
/// only tracks what the user did with it. Two-state cycle:
/// answering → submitted → (reset) → answering.
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    selected: HashMap<u32, usize>,
    show_results: bool,
}

/// Grading outcome handed back to the caller on submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the user's pick, overwriting an earlier pick for the same
    /// question. No-op while results are shown: selection stays locked
    /// until `reset`. An unknown id or out-of-range index is a caller bug;
    /// the views can only produce valid pairs.
    pub fn select_answer(&mut self, question_id: u32, option_index: usize) {
        if self.show_results {
            return;
        }
        self.selected.insert(question_id, option_index);
    }

    pub fn selected(&self, question_id: u32) -> Option<usize> {
        self.selected.get(&question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_answered(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.selected.contains_key(&q.id))
    }

    /// Submission is only reachable with a complete answer sheet and
    /// results not yet shown; the view disables the button otherwise.
    pub fn can_submit(&self, questions: &[Question]) -> bool {
        !self.show_results && self.all_answered(questions)
    }

    pub fn results_shown(&self) -> bool {
        self.show_results
    }

    /// Grades the quiz. Returns `None` and changes nothing unless
    /// `can_submit` holds.
    pub fn submit(&mut self, questions: &[Question]) -> Option<QuizSummary> {
        if !self.can_submit(questions) {
            return None;
        }
        self.show_results = true;
        let correct = questions
            .iter()
            .filter(|q| self.selected.get(&q.id) == Some(&q.correct))
            .count();
        Some(QuizSummary {
            correct,
            total: questions.len(),
        })
    }

    /// Back to the initial state: empty answer sheet, results hidden.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.show_results = false;
    }

    /// Display classification for one option row. `Neutral` until results
    /// are shown; afterwards the answer key reads `Correct` (selected or
    /// not) and a wrong pick reads `IncorrectSelected`.
    pub fn option_feedback(&self, question: &Question, option_index: usize) -> OptionFeedback {
        debug_assert!(option_index < question.options.len());
        if !self.show_results {
            return OptionFeedback::Neutral;
        }
        if option_index == question.correct {
            OptionFeedback::Correct
        } else if self.selected(question.id) == Some(option_index) {
            OptionFeedback::IncorrectSelected
        } else {
            OptionFeedback::Neutral
        }
    }
}

impl QuizSummary {
    /// The notification shown right after grading. A perfect score gets the
    /// celebratory variant; at least half correct stays neutral, below half
    /// turns into a warning.
    pub fn toast(&self) -> Toast {
        if self.correct == self.total {
            return Toast {
                title: "🎉 Отлично!".to_owned(),
                description: format!(
                    "Вы ответили правильно на все {} вопроса!",
                    self.total
                ),
                severity: Severity::Success,
            };
        }
        let severity = if self.correct >= self.total / 2 {
            Severity::Info
        } else {
            Severity::Warning
        };
        Toast {
            title: "Результаты теста".to_owned(),
            description: format!("Правильных ответов: {} из {}", self.correct, self.total),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        (1..=4)
            .map(|id| Question {
                id,
                prompt: format!("q{id}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct: 1,
            })
            .collect()
    }

    fn answer_all(state: &mut QuizState, questions: &[Question], correct_for: &[u32]) {
        for q in questions {
            let pick = if correct_for.contains(&q.id) {
                q.correct
            } else {
                (q.correct + 1) % q.options.len()
            };
            state.select_answer(q.id, pick);
        }
    }

    #[test]
    fn select_answer_overwrites_previous_pick() {
        let mut state = QuizState::new();
        state.select_answer(1, 0);
        state.select_answer(1, 3);
        assert_eq!(state.selected(1), Some(3));
        assert_eq!(state.answered_count(), 1);
    }

    #[test]
    fn submit_is_unreachable_until_every_question_is_answered() {
        let questions = bank();
        let mut state = QuizState::new();
        // Question 3 left unanswered.
        for q in &questions {
            if q.id != 3 {
                state.select_answer(q.id, q.correct);
            }
        }
        assert!(!state.can_submit(&questions));
        assert_eq!(state.submit(&questions), None);
        assert!(!state.results_shown());

        state.select_answer(3, 0);
        assert!(state.can_submit(&questions));
    }

    #[test]
    fn submit_all_correct_gives_celebratory_toast() {
        let questions = bank();
        let mut state = QuizState::new();
        answer_all(&mut state, &questions, &[1, 2, 3, 4]);

        let summary = state.submit(&questions).expect("complete sheet submits");
        assert_eq!(summary, QuizSummary { correct: 4, total: 4 });

        let toast = summary.toast();
        assert_eq!(toast.severity, Severity::Success);
        assert!(toast.description.contains('4'));
    }

    #[test]
    fn submit_exactly_half_correct_keeps_neutral_severity() {
        let questions = bank();
        let mut state = QuizState::new();
        answer_all(&mut state, &questions, &[1, 2]);

        let summary = state.submit(&questions).unwrap();
        assert_eq!(summary, QuizSummary { correct: 2, total: 4 });
        // 2 >= 4/2: the boundary stays on the neutral side.
        assert_eq!(summary.toast().severity, Severity::Info);
    }

    #[test]
    fn submit_below_half_correct_warns() {
        let questions = bank();
        let mut state = QuizState::new();
        answer_all(&mut state, &questions, &[1]);

        let summary = state.submit(&questions).unwrap();
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.toast().severity, Severity::Warning);
    }

    #[test]
    fn selection_is_locked_while_results_are_shown() {
        let questions = bank();
        let mut state = QuizState::new();
        answer_all(&mut state, &questions, &[1, 2, 3, 4]);
        state.submit(&questions).unwrap();

        state.select_answer(1, 0);
        assert_eq!(state.selected(1), Some(questions[0].correct));

        // A second submit is also off the table.
        assert!(!state.can_submit(&questions));
        assert_eq!(state.submit(&questions), None);
    }

    #[test]
    fn reset_is_idempotent_and_round_trips_after_submit() {
        let questions = bank();
        let mut state = QuizState::new();
        answer_all(&mut state, &questions, &[1, 2, 3, 4]);
        state.submit(&questions).unwrap();

        state.reset();
        assert_eq!(state.answered_count(), 0);
        assert!(!state.results_shown());

        state.reset();
        assert_eq!(state.answered_count(), 0);
        assert!(!state.results_shown());

        // The cleared sheet accepts answers and submits again.
        answer_all(&mut state, &questions, &[1]);
        assert!(state.can_submit(&questions));
    }

    #[test]
    fn feedback_classifies_key_wrong_pick_and_the_rest() {
        let questions = bank();
        let mut state = QuizState::new();

        // Nothing is classified before submission.
        state.select_answer(1, 0);
        assert_eq!(state.option_feedback(&questions[0], 0), OptionFeedback::Neutral);

        answer_all(&mut state, &questions, &[2, 3, 4]); // q1 stays wrong (pick 2)
        state.select_answer(1, 2);
        state.submit(&questions).unwrap();

        let q1 = &questions[0];
        assert_eq!(state.option_feedback(q1, q1.correct), OptionFeedback::Correct);
        assert_eq!(state.option_feedback(q1, 2), OptionFeedback::IncorrectSelected);
        assert_eq!(state.option_feedback(q1, 0), OptionFeedback::Neutral);
        assert_eq!(state.option_feedback(q1, 3), OptionFeedback::Neutral);

        // A correctly answered question marks only its key.
        let q2 = &questions[1];
        assert_eq!(state.option_feedback(q2, q2.correct), OptionFeedback::Correct);
        assert_eq!(state.option_feedback(q2, 0), OptionFeedback::Neutral);
    }
}
