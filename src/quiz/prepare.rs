use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{Question, QuestionType, QuizConfig};

pub fn prepare(questions: &[Question], config: &QuizConfig) -> Vec<Question> {
    prepare_with_rng(questions, config, &mut rand::thread_rng())
}

/// The bank is never touched; each flag only controls its own shuffle.
pub fn prepare_with_rng<R: Rng + ?Sized>(
    questions: &[Question],
    config: &QuizConfig,
    rng: &mut R,
) -> Vec<Question> {
    debug!(
        "Preparing {} questions (shuffle questions: {}, shuffle options: {})",
        questions.len(),
        config.randomizar_preguntas,
        config.randomizar_respuestas
    );

    let mut presented = questions.to_vec();
    if config.randomizar_preguntas {
        presented.shuffle(rng);
    }

    if config.randomizar_respuestas {
        // Free-text questions keep whatever options they carry
        presented
            .iter_mut()
            .filter(|q| q.kind == QuestionType::Select)
            .for_each(|q| q.options.shuffle(rng));
    }

    presented
}
