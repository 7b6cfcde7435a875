use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::quiz::{AnswerSheet, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Borderline,
    Poor,
    Failing,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Borderline,
        Tier::Poor,
        Tier::Failing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Borderline => "borderline",
            Tier::Poor => "poor",
            Tier::Failing => "failing",
        }
    }
}

/// Highest band first, first match wins. NaN falls through to `Failing`.
pub fn classify_tier(percentage: f64) -> Tier {
    if percentage >= 80.0 {
        Tier::Excellent
    } else if percentage >= 60.0 {
        Tier::Good
    } else if percentage >= 50.0 {
        Tier::Borderline
    } else if percentage >= 30.0 {
        Tier::Poor
    } else {
        Tier::Failing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    // 1-based
    pub index: usize,
    pub question: String,
    pub submitted: String,
    pub is_correct: bool,
    pub correct: String,
}

impl ReviewItem {
    pub fn correct_answer(&self) -> Option<&str> {
        if self.is_correct {
            None
        } else {
            Some(self.correct.as_str())
        }
    }
}

/// An answer whose id is not in `questions` still gets an item, with empty question text.
pub fn build_review(questions: &[Question], answers: &AnswerSheet) -> Vec<ReviewItem> {
    let texts: HashMap<&str, &str> = questions
        .iter()
        .map(|q| (q.id.as_str(), q.text.as_str()))
        .collect();

    answers
        .iter()
        .enumerate()
        .map(|(i, (id, record))| {
            let question = match texts.get(id) {
                Some(text) => text.to_string(),
                None => {
                    warn!("No question with id {:?} for answer #{}", id, i + 1);
                    String::new()
                }
            };
            ReviewItem {
                index: i + 1,
                question,
                submitted: record.respondido.clone(),
                is_correct: record.es_correcta,
                correct: record.correcto.clone(),
            }
        })
        .collect()
}
