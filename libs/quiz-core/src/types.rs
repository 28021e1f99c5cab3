//! Core types for quiz records.

use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    /// 1-based index into `options`.
    pub correct: u8,
}

impl QuizRecord {
    /// Build a record, rejecting a correct index outside 1-4.
    pub fn new(question: String, options: [String; OPTION_COUNT], correct: u8) -> Option<Self> {
        if !(1..=OPTION_COUNT as u8).contains(&correct) {
            return None;
        }
        Some(Self {
            question,
            options,
            correct,
        })
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[usize::from(self.correct) - 1]
    }
}

/// One row of the quiz table, named after the table header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TableRow {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer1")]
    pub answer1: String,
    #[serde(rename = "Answer2")]
    pub answer2: String,
    #[serde(rename = "Answer3")]
    pub answer3: String,
    #[serde(rename = "Answer4")]
    pub answer4: String,
    #[serde(rename = "Correct Answer")]
    pub correct: u8,
}

impl From<&QuizRecord> for TableRow {
    fn from(record: &QuizRecord) -> Self {
        let [answer1, answer2, answer3, answer4] = record.options.clone();
        Self {
            question: record.question.clone(),
            answer1,
            answer2,
            answer3,
            answer4,
            correct: record.correct,
        }
    }
}

impl TableRow {
    pub(crate) fn into_record(self) -> Option<QuizRecord> {
        QuizRecord::new(
            self.question,
            [self.answer1, self.answer2, self.answer3, self.answer4],
            self.correct,
        )
    }
}
