//! Quiz preparation and scoring.
//!
//! [`prepare`] turns a question bank into the sequence a student sees, shuffling
//! question order and option order according to the topic's [`QuizConfig`].
//! Once the quiz is over, [`classify_tier`] buckets the score and
//! [`build_review`] lists every answered question for the results page.

pub mod config;
pub mod quiz;

pub use config::AppConfig;
pub use quiz::bank::{BankError, QuestionBank};
pub use quiz::grade::{answers_match, grade, AnswerKey};
pub use quiz::prepare::{prepare, prepare_with_rng};
pub use quiz::review::{build_review, classify_tier, ReviewItem, Tier};
pub use quiz::style::TierStyle;
pub use quiz::summary::render_summary;
pub use quiz::{AnswerRecord, AnswerSheet, Attempt, Question, QuestionType, QuizConfig};
