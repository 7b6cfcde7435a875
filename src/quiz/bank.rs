use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::{Attempt, Question, QuizConfig};

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid quiz data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank has no questions")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub config: QuizConfig,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let bank: QuestionBank = serde_json::from_reader(reader)?;
        if bank.questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(bank)
    }

    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let bank = Self::from_reader(open(path)?)?;
        info!(
            "Loaded {} questions from {}",
            bank.questions.len(),
            path.display()
        );
        Ok(bank)
    }
}

impl Attempt {
    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        read_json(path)
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BankError> {
    Ok(serde_json::from_reader(open(path)?)?)
}

fn open(path: &Path) -> Result<BufReader<File>, BankError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })
}
