//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for an isolated scratch directory with input/output paths
//! - Helper functions for creating quiz files

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use quiz_tools::config::Config;

/// Scratch directory holding one quiz input file and its output table.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    pub dir: PathBuf,
    pub config: Config,
}

impl TestContext {
    /// Create a new context with an empty scratch directory.
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("quiz-tools-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("Failed to create scratch directory");

        let config = Config::from_lookup(|name| match name {
            "QUIZ_INPUT" => Some(dir.join("q.txt").display().to_string()),
            "QUIZ_OUTPUT" => Some(dir.join("q.csv").display().to_string()),
            "QUIZ_BANK" => Some(dir.join("q.csv").display().to_string()),
            _ => None,
        })
        .expect("Failed to build test config");

        Self { dir, config }
    }

    /// Write the quiz input file.
    pub fn write_input(&self, content: &str) {
        fs::write(&self.config.input, content).expect("Failed to write input");
    }

    /// Read the output table as text.
    pub fn read_output(&self) -> String {
        fs::read_to_string(&self.config.output).expect("Failed to read output")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}
