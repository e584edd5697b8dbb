use super::*;

impl PortalApp {
    /// A radio row was clicked. Silently ignored while results are shown;
    /// the rows are disabled then anyway.
    pub fn answer_selected(&mut self, question_id: u32, option_index: usize) {
        self.quiz.select_answer(question_id, option_index);
    }

    /// Grades the quiz and raises the result toast. `now` is the UI clock
    /// (`ctx.input(|i| i.time)`), recorded so the toast can expire.
    /// Does nothing unless the sheet is complete — the view keeps the
    /// button disabled in that case, this is the second line of defense.
    pub fn submit_quiz(&mut self, now: f64) {
        let Some(summary) = self.quiz.submit(&self.questions) else {
            return;
        };
        log::info!("quiz graded: {}/{}", summary.correct, summary.total);
        self.toast = Some(ActiveToast {
            toast: summary.toast(),
            shown_at: now,
        });
    }

    /// Back to a clean, unanswered quiz.
    pub fn reset_quiz(&mut self) {
        self.quiz.reset();
        self.toast = None;
        log::debug!("quiz reset");
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
