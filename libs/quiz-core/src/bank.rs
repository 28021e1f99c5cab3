//! A question bank backed by a quiz table file.

use std::path::{Path, PathBuf};

use crate::error::TableError;
use crate::search::{self, SearchMode, SearchResult};
use crate::table::{self, TableWriter};
use crate::types::QuizRecord;

/// Records loaded from a table file, kept in sync with the file on every
/// change.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    path: PathBuf,
    records: Vec<QuizRecord>,
}

impl QuestionBank {
    /// Load all records from `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, TableError> {
        let path = path.into();
        let records = table::read_table(&path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Search questions and options.
    pub fn search(&self, query: &str, mode: SearchMode) -> SearchResult<'_> {
        search::search(&self.records, query, mode)
    }

    /// Records whose question text contains `query`.
    pub fn find(&self, query: &str, mode: SearchMode) -> Vec<&QuizRecord> {
        search::find_questions(&self.records, query, mode)
    }

    /// Append a record to the file and to the bank.
    pub fn add(&mut self, record: QuizRecord) -> Result<(), TableError> {
        let mut writer = TableWriter::append_to(&self.path)?;
        writer.append(&record)?;
        writer.into_inner()?;
        self.records.push(record);
        Ok(())
    }

    /// Remove every record equal to `target` and rewrite the file.
    ///
    /// Returns how many records were removed. The file is left untouched
    /// when nothing matches.
    pub fn remove(&mut self, target: &QuizRecord) -> Result<usize, TableError> {
        let before = self.records.len();
        let kept: Vec<QuizRecord> = self
            .records
            .iter()
            .filter(|record| *record != target)
            .cloned()
            .collect();
        let removed = before - kept.len();

        if removed > 0 {
            table::write_table(&self.path, &kept)?;
            self.records = kept;
        }
        Ok(removed)
    }
}
