//! Quiz configuration, optionally read from a TOML file.
//!
//! ```toml
//! question_count = 10
//! pass_threshold = 0.8
//! vocabulary_path = "vocab.json"
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::quiz_engine::{error::QuizError, grader::DEFAULT_PASS_THRESHOLD};

pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: PathBuf,
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

fn default_pass_threshold() -> f64 {
    DEFAULT_PASS_THRESHOLD
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("vocab.json")
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            question_count: default_question_count(),
            pass_threshold: default_pass_threshold(),
            vocabulary_path: default_vocabulary_path(),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, QuizError> {
        let config: QuizConfig =
            toml::from_str(s).map_err(|e| QuizError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let raw = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// The threshold must lie in `(0, 1]`.
    pub fn validate(&self) -> Result<(), QuizError> {
        if !(self.pass_threshold > 0.0 && self.pass_threshold <= 1.0) {
            return Err(QuizError::Config(format!(
                "pass_threshold must be in (0, 1], got {}",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}
