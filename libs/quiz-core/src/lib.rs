//! Core quiz library shared by the converter and the question bank tool.
//!
//! Provides:
//! - Line parser for `答：` quiz files
//! - CSV table codec (header + one row per question)
//! - Question bank with substring search
//! - Shared types (QuizRecord, ParseError, etc.)

pub mod bank;
pub mod error;
pub mod parser;
pub mod search;
pub mod table;
pub mod types;

pub use bank::QuestionBank;
pub use error::{ParseError, Result, TableError};
pub use parser::{parse, parse_line};
pub use search::{search, AnswerHit, QuestionMatches, SearchMode, SearchResult};
pub use table::{read_table, write_table, TableWriter, HEADER};
pub use types::{QuizRecord, OPTION_COUNT};
