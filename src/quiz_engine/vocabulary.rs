//! Vocabulary loading and record validation.
//!
//! The source document keeps its records under a top-level `vocabulary` key:
//!
//! ```json
//! { "vocabulary": [ { "term": "Synergy", "definition": "Combined effect ..." } ] }
//! ```
//!
//! Records without a term or definition never reach the sampling pool. They
//! are logged and reported in [`Vocabulary::rejected`] instead.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::quiz_engine::{error::QuizError, models::VocabularyEntry};

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    vocabulary: Vec<Value>,
}

#[derive(Debug)]
pub struct Vocabulary {
    pub entries: Vec<VocabularyEntry>,
    /// One [`QuizError::MalformedRecord`] per skipped record.
    pub rejected: Vec<QuizError>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn text_field<'v>(record: &'v Value, field: &str) -> Result<&'v str, String> {
    match record.get(field) {
        None | Some(Value::Null) => Err(format!("missing `{field}`")),
        Some(Value::String(s)) if s.trim().is_empty() => Err(format!("blank `{field}`")),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(format!("`{field}` is not a string")),
    }
}

fn validate_record(index: usize, record: &Value) -> Result<VocabularyEntry, QuizError> {
    let malformed = |reason: String| QuizError::MalformedRecord { index, reason };
    if !record.is_object() {
        return Err(malformed("record is not an object".to_string()));
    }
    let term = text_field(record, "term").map_err(malformed)?;
    let definition = text_field(record, "definition").map_err(malformed)?;
    Ok(VocabularyEntry::new(term, definition))
}

/// Parse a vocabulary document, dropping malformed records.
pub fn parse_vocabulary(document: &str) -> Result<Vocabulary, QuizError> {
    let file: VocabularyFile = serde_json::from_str(document)?;

    let mut entries = Vec::with_capacity(file.vocabulary.len());
    let mut rejected = Vec::new();
    let mut seen_terms = HashSet::new();

    for (index, record) in file.vocabulary.iter().enumerate() {
        match validate_record(index, record) {
            Ok(entry) => {
                if !seen_terms.insert(entry.term.clone()) {
                    warn!(term = %entry.term, "duplicate vocabulary term");
                }
                entries.push(entry);
            }
            Err(err) => {
                warn!(error = %err, "skipping vocabulary record");
                rejected.push(err);
            }
        }
    }

    if entries.is_empty() {
        return Err(QuizError::InsufficientData(format!(
            "no valid vocabulary records ({} rejected)",
            rejected.len()
        )));
    }

    Ok(Vocabulary { entries, rejected })
}

pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, QuizError> {
    let raw = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vocabulary(&raw)
}
