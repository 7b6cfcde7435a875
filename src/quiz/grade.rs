use std::collections::HashMap;

use log::debug;

use crate::quiz::{AnswerRecord, AnswerSheet, Attempt, Question};

pub type AnswerKey = HashMap<String, String>;

/// Case-insensitive, ignoring surrounding whitespace.
pub fn answers_match(correct: &str, submitted: &str) -> bool {
    correct.trim().to_lowercase() == submitted.trim().to_lowercase()
}

/// Unanswered questions are recorded with an empty submission and never count as correct.
pub fn grade(
    questions: &[Question],
    key: &AnswerKey,
    responses: &HashMap<String, String>,
) -> Attempt {
    let mut answers = AnswerSheet::new();
    let mut correct = 0usize;

    for question in questions {
        let correcto = key.get(&question.id).map(String::as_str).unwrap_or("");
        let respondido = responses
            .get(&question.id)
            .map(String::as_str)
            .unwrap_or("");
        let es_correcta = !respondido.trim().is_empty() && answers_match(correcto, respondido);
        if es_correcta {
            correct += 1;
        }
        answers.insert(
            question.id.clone(),
            AnswerRecord::new(correcto, respondido, es_correcta),
        );
    }

    let percentage = if questions.is_empty() {
        0.0
    } else {
        (correct as f64 * 100.0 / questions.len() as f64).round()
    };
    debug!(
        "Graded {} questions: {} correct ({}%)",
        questions.len(),
        correct,
        percentage
    );

    Attempt::new(percentage, answers)
}
