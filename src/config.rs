use std::path::PathBuf;

use crate::quiz::QuizConfig;

/// Runtime settings for the command-line runner, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bank_path: PathBuf,
    pub attempt_path: Option<PathBuf>,
    // Graded together
    pub key_path: Option<PathBuf>,
    pub responses_path: Option<PathBuf>,
    // Overrides for the bank's own toggles
    pub randomizar_preguntas: Option<bool>,
    pub randomizar_respuestas: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bank_path: PathBuf::from("bank.json"),
            attempt_path: None,
            key_path: None,
            responses_path: None,
            randomizar_preguntas: None,
            randomizar_respuestas: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let default = Self::default();
        Self {
            bank_path: lookup("QUIZ_BANK_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.bank_path),
            attempt_path: lookup("QUIZ_ATTEMPT_PATH").map(PathBuf::from),
            key_path: lookup("QUIZ_KEY_PATH").map(PathBuf::from),
            responses_path: lookup("QUIZ_RESPONSES_PATH").map(PathBuf::from),
            randomizar_preguntas: lookup("RANDOMIZAR_PREGUNTAS").and_then(|v| parse_flag(&v)),
            randomizar_respuestas: lookup("RANDOMIZAR_RESPUESTAS").and_then(|v| parse_flag(&v)),
        }
    }

    pub fn quiz_config(&self, bank: QuizConfig) -> QuizConfig {
        QuizConfig {
            randomizar_preguntas: self
                .randomizar_preguntas
                .unwrap_or(bank.randomizar_preguntas),
            randomizar_respuestas: self
                .randomizar_respuestas
                .unwrap_or(bank.randomizar_respuestas),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
