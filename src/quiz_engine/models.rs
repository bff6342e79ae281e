use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// One term/definition pair. The term doubles as the entry's identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub definition: String,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        VocabularyEntry { term: term.into(), definition: definition.into() }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    SingleChoice,
    OpenEnded,
}

impl QuestionKind {
    /// Every kind, in the order used for the uniform type draw.
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::MultipleChoice,
        QuestionKind::SingleChoice,
        QuestionKind::OpenEnded,
    ];
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple choice"),
            QuestionKind::SingleChoice   => write!(f, "single choice"),
            QuestionKind::OpenEnded      => write!(f, "open ended"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        term: String,
        prompt: String,
        correct_answers: BTreeSet<String>,
        options: Vec<String>,
    },
    SingleChoice {
        term: String,
        prompt: String,
        correct_answer: String,
        options: Vec<String>,
    },
    OpenEnded {
        term: String,
        prompt: String,
        correct_answer: String,
    },
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::SingleChoice { .. }   => QuestionKind::SingleChoice,
            Question::OpenEnded { .. }      => QuestionKind::OpenEnded,
        }
    }

    pub fn term(&self) -> &str {
        match self {
            Question::MultipleChoice { term, .. }
            | Question::SingleChoice { term, .. }
            | Question::OpenEnded { term, .. } => term,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. }
            | Question::SingleChoice { prompt, .. }
            | Question::OpenEnded { prompt, .. } => prompt,
        }
    }

    /// Answer options in display order; empty for open-ended questions.
    pub fn options(&self) -> &[String] {
        match self {
            Question::MultipleChoice { options, .. }
            | Question::SingleChoice { options, .. } => options,
            Question::OpenEnded { .. } => &[],
        }
    }

    /// The expected answer(s), for feedback after a wrong submission.
    pub fn expected_answers(&self) -> Vec<&str> {
        match self {
            Question::MultipleChoice { correct_answers, .. } => {
                correct_answers.iter().map(String::as_str).collect()
            }
            Question::SingleChoice { correct_answer, .. }
            | Question::OpenEnded { correct_answer, .. } => vec![correct_answer.as_str()],
        }
    }
}

// ---------------------------------------------------------------------------
// Submissions and results
// ---------------------------------------------------------------------------

/// What the user submitted for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Selections(BTreeSet<String>),
    Choice(String),
    Text(String),
}

impl Response {
    pub fn selections<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Response::Selections(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Selections(items) => {
                let joined = items.iter().map(String::as_str).collect::<Vec<_>>().join(" | ");
                write!(f, "{}", joined)
            }
            Response::Choice(s) | Response::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// Only set for open-ended questions.
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub user_answer: Response,
    pub correct: bool,
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    NeedsReview,
}

impl Rating {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Rating::Excellent
        } else if pct >= 60.0 {
            Rating::Good
        } else {
            Rating::NeedsReview
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Excellent   => write!(f, "Excellent"),
            Rating::Good        => write!(f, "Good"),
            Rating::NeedsReview => write!(f, "Needs review"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub rating: Rating,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub question_count: usize,
    /// `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Ten questions from an entropy-seeded source.
    pub fn new() -> Self {
        QuizRequest { question_count: 10, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self::new()
    }
}
