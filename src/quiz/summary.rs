use std::fmt;

use crate::quiz::review::{build_review, classify_tier, ReviewItem};
use crate::quiz::{Attempt, Question};

impl fmt::Display for ReviewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_correct { "✓" } else { "✗" };
        write!(
            f,
            "{}. {}\n   Your answer: {} {}",
            self.index, self.question, self.submitted, mark
        )?;
        if let Some(correct) = self.correct_answer() {
            write!(f, "\n   Correct answer: {}", correct)?;
        }
        Ok(())
    }
}

pub fn render_summary(questions: &[Question], attempt: &Attempt) -> String {
    let tier = classify_tier(attempt.percentage);
    let mut lines = vec![
        format!(
            "Quiz finished! Score: {:.0}% ({})",
            attempt.percentage,
            tier.name()
        ),
        format!(
            "You answered {} of {} questions correctly",
            attempt.correct_count(),
            attempt.total()
        ),
    ];

    let review = build_review(questions, &attempt.answers);
    if !review.is_empty() {
        lines.push(String::new());
        lines.extend(review.iter().map(|item| item.to_string()));
    }

    lines.join("\n")
}
