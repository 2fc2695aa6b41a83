//! Session configuration
//!
//! Where the shell writes results and what each result file is called.

use std::path::{Path, PathBuf};

use sparsemat_core::Operation;

use crate::error::{Error, Result};

/// Configuration for an arithmetic session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory receiving result files
    pub result_dir: PathBuf,
    /// File name for addition results
    pub addition_file: String,
    /// File name for subtraction results
    pub subtraction_file: String,
    /// File name for multiplication results
    pub multiplication_file: String,
}

impl SessionConfig {
    /// Create config writing into `result_dir` with default file names
    pub fn new(result_dir: impl Into<PathBuf>) -> Self {
        Self {
            result_dir: result_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_addition_file(mut self, name: impl Into<String>) -> Self {
        self.addition_file = name.into();
        self
    }

    pub fn with_subtraction_file(mut self, name: impl Into<String>) -> Self {
        self.subtraction_file = name.into();
        self
    }

    pub fn with_multiplication_file(mut self, name: impl Into<String>) -> Self {
        self.multiplication_file = name.into();
        self
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// Full path of the result file for `op`
    pub fn output_path(&self, op: Operation) -> PathBuf {
        let name = match op {
            Operation::Addition => &self.addition_file,
            Operation::Subtraction => &self.subtraction_file,
            Operation::Multiplication => &self.multiplication_file,
        };
        self.result_dir.join(name)
    }

    /// Check that the result directory exists and is a directory
    pub fn validate(&self) -> Result<()> {
        if !self.result_dir.is_dir() {
            return Err(Error::NotADirectory(self.result_dir.clone()));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            result_dir: PathBuf::from("."),
            addition_file: "addition.txt".to_string(),
            subtraction_file: "difference.txt".to_string(),
            multiplication_file: "multiplication.txt".to_string(),
        }
    }
}
