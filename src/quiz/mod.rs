pub mod bank;
pub mod grade;
pub mod prepare;
pub mod review;
pub mod style;
pub mod summary;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Select,
    Input,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    // Only meaningful for `select` questions
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    pub fn select(id: &str, text: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            kind: QuestionType::Select,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn input(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: QuestionType::Input,
            text: text.to_string(),
            options: Vec::new(),
        }
    }
}

// Missing flags read as false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub randomizar_preguntas: bool,
    pub randomizar_respuestas: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub correcto: String,
    pub respondido: String,
    #[serde(rename = "esCorrecta")]
    pub es_correcta: bool,
}

impl AnswerRecord {
    pub fn new(correcto: &str, respondido: &str, es_correcta: bool) -> Self {
        Self {
            correcto: correcto.to_string(),
            respondido: respondido.to_string(),
            es_correcta,
        }
    }
}

/// Answer records keyed by question id, in insertion order.
///
/// Re-inserting an existing id replaces the record but keeps its original position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: IndexMap<String, AnswerRecord>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, record: AnswerRecord) -> Option<AnswerRecord> {
        self.entries.insert(id, record)
    }

    pub fn get(&self, id: &str) -> Option<&AnswerRecord> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerRecord)> {
        self.entries
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, AnswerRecord)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (String, AnswerRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attempt {
    pub percentage: f64,
    pub answers: AnswerSheet,
}

impl Attempt {
    pub fn new(percentage: f64, answers: AnswerSheet) -> Self {
        Self {
            percentage,
            answers,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|(_, r)| r.es_correcta).count()
    }

    pub fn total(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_flags_default_to_false() {
        let config: QuizConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, QuizConfig::default());

        let config: QuizConfig =
            serde_json::from_str(r#"{"randomizar_respuestas": true}"#).unwrap();
        assert!(!config.randomizar_preguntas);
        assert!(config.randomizar_respuestas);
    }

    #[test]
    fn question_reads_type_field_and_optional_options() {
        let q: Question =
            serde_json::from_str(r#"{"id": "q7", "type": "input", "text": "Capital of Peru?"}"#)
                .unwrap();
        assert_eq!(q.kind, QuestionType::Input);
        assert!(q.options.is_empty());
    }

    #[test]
    fn question_without_type_is_rejected() {
        let res: Result<Question, _> =
            serde_json::from_str(r#"{"id": "q1", "text": "2+2?", "options": ["3", "4"]}"#);
        let err = res.unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }

    #[test]
    fn large_sheet_keeps_order_and_lookups() {
        let sheet: AnswerSheet = (0..50_000)
            .map(|i| {
                (
                    format!("q{}", i),
                    AnswerRecord::new("a", "a", i % 2 == 0),
                )
            })
            .collect();
        assert_eq!(sheet.len(), 50_000);
        assert_eq!(sheet.iter().next().map(|(id, _)| id), Some("q0"));
        assert_eq!(sheet.iter().last().map(|(id, _)| id), Some("q49999"));
        assert!(!sheet.get("q49999").unwrap().es_correcta);
    }

    #[test]
    fn sheet_keeps_first_position_on_reinsert() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("b".to_string(), AnswerRecord::new("1", "1", true));
        sheet.insert("a".to_string(), AnswerRecord::new("2", "3", false));
        let old = sheet.insert("b".to_string(), AnswerRecord::new("1", "0", false));

        assert_eq!(old, Some(AnswerRecord::new("1", "1", true)));
        assert_eq!(sheet.len(), 2);
        let ids: Vec<&str> = sheet.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(!sheet.get("b").unwrap().es_correcta);
    }

    #[test]
    fn sheet_deserializes_in_document_order() {
        let json = r#"{
            "z": {"correcto": "4", "respondido": "4", "esCorrecta": true},
            "a": {"correcto": "Lima", "respondido": "lima", "esCorrecta": true},
            "m": {"correcto": "8", "respondido": "9", "esCorrecta": false}
        }"#;
        let sheet: AnswerSheet = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = sheet.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);

        let back = serde_json::to_string(&sheet).unwrap();
        assert!(back.find("\"z\"").unwrap() < back.find("\"a\"").unwrap());
        assert!(back.contains("\"esCorrecta\":false"));
    }

    #[test]
    fn attempt_counts() {
        let attempt = Attempt::new(
            50.0,
            vec![
                ("q1".to_string(), AnswerRecord::new("4", "4", true)),
                ("q2".to_string(), AnswerRecord::new("6", "5", false)),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(attempt.correct_count(), 1);
        assert_eq!(attempt.total(), 2);
    }
}
