// src/data.rs

use std::collections::HashSet;

use crate::model::{PortalContent, Question};

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    let questions: Vec<Question> =
        serde_yaml::from_str(file_content).expect("malformed embedded question bank");
    validate_bank(&questions);
    questions
}

/// Loads the page copy from the embedded YAML.
pub fn read_content_embedded() -> PortalContent {
    let file_content = include_str!("data/content.yaml");
    serde_yaml::from_str(file_content).expect("malformed embedded page content")
}

/// Bank invariants are an authoring contract; a violation must abort at
/// first launch, not surface mid-quiz.
fn validate_bank(questions: &[Question]) {
    assert!(!questions.is_empty(), "question bank is empty");
    let mut seen = HashSet::new();
    for q in questions {
        assert!(q.id > 0, "question id {} is not positive", q.id);
        assert!(seen.insert(q.id), "duplicate question id {}", q.id);
        assert!(
            q.options.len() >= 2,
            "question {} has fewer than two options",
            q.id
        );
        assert!(
            q.correct < q.options.len(),
            "question {}: correct index {} is out of bounds",
            q.id,
            q.correct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_bank_parses_and_passes_validation() {
        let questions = read_questions_embedded();
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| q.options.len() >= 2));
        assert!(questions.iter().all(|q| q.correct < q.options.len()));
    }

    #[test]
    fn page_content_parses_with_expected_section_sizes() {
        let content = read_content_embedded();
        assert_eq!(content.mistakes.items.len(), 4);
        assert_eq!(content.prohibited.cards.len(), 2);
        assert_eq!(content.rescuers.steps.len(), 6);
        assert_eq!(content.hotlines.numbers.len(), 3);
        assert_eq!(content.footer.lines.len(), 2);
    }
}
