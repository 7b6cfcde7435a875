use std::collections::HashMap;

use dotenv::dotenv;
use log::{debug, info};
use quiz_engine::quiz::bank::read_json;
use quiz_engine::{
    classify_tier, grade, prepare, render_summary, AnswerKey, AppConfig, Attempt, QuestionBank,
};

type RunResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn main() -> RunResult {
    // .env is optional
    dotenv().ok();
    pretty_env_logger::init();
    info!("Starting quiz engine...");

    let config = AppConfig::from_env();
    debug!("{:?}", config);

    let bank = QuestionBank::from_path(&config.bank_path)?;
    let quiz_config = config.quiz_config(bank.config);
    let presented = prepare(&bank.questions, &quiz_config);

    println!("Questions as presented:");
    for (i, question) in presented.iter().enumerate() {
        println!("Question {}: {}", i + 1, question.text);
        for option in &question.options {
            println!("   - {}", option);
        }
    }

    let attempt = match (&config.attempt_path, &config.key_path, &config.responses_path) {
        (Some(path), _, _) => Some(Attempt::from_path(path)?),
        (None, Some(key_path), Some(responses_path)) => {
            let key: AnswerKey = read_json(key_path)?;
            let responses: HashMap<String, String> = read_json(responses_path)?;
            Some(grade(&presented, &key, &responses))
        }
        _ => None,
    };

    if let Some(attempt) = attempt {
        let tier = classify_tier(attempt.percentage);
        let style = tier.style();
        info!(
            "Attempt scored {:.0}% -> {} ({} / {})",
            attempt.percentage,
            tier.name(),
            style.background,
            style.text
        );
        println!();
        println!("{}", render_summary(&bank.questions, &attempt));
    }

    Ok(())
}
