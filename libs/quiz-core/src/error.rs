//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a quiz line is rejected.
///
/// Every variant carries the 1-based line number and the raw line content so
/// the caller can point at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing answer prefix at line {line}: {content}")]
    MissingPrefix { line: usize, content: String },

    #[error("answer is not a digit at line {line}: {content}")]
    InvalidAnswerDigit { line: usize, content: String },

    #[error("answer {digit} out of range 1-4 at line {line}: {content}")]
    AnswerOutOfRange {
        line: usize,
        content: String,
        digit: u32,
    },

    #[error("missing \" _\" separator at line {line}: {content}")]
    MissingSeparator { line: usize, content: String },

    #[error("missing option marker {marker} at line {line}: {content}")]
    IncompleteOptions {
        line: usize,
        content: String,
        marker: &'static str,
    },

    #[error("option markers out of order at line {line}: {content}")]
    OutOfOrderOptions { line: usize, content: String },
}

impl ParseError {
    /// 1-based line number of the rejected line.
    pub fn line_number(&self) -> usize {
        match self {
            Self::MissingPrefix { line, .. }
            | Self::InvalidAnswerDigit { line, .. }
            | Self::AnswerOutOfRange { line, .. }
            | Self::MissingSeparator { line, .. }
            | Self::IncompleteOptions { line, .. }
            | Self::OutOfOrderOptions { line, .. } => *line,
        }
    }

    /// Raw content of the rejected line.
    pub fn content(&self) -> &str {
        match self {
            Self::MissingPrefix { content, .. }
            | Self::InvalidAnswerDigit { content, .. }
            | Self::AnswerOutOfRange { content, .. }
            | Self::MissingSeparator { content, .. }
            | Self::IncompleteOptions { content, .. }
            | Self::OutOfOrderOptions { content, .. } => content,
        }
    }
}

/// Errors reading or writing a quiz table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}
