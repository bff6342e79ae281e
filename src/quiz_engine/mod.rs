//! Core quiz engine — question generation, answer grading, and session flow.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: vocabulary entries, questions, responses, results |
//! | `error`       | `QuizError` and its fatal/recoverable classification |
//! | `random`      | The injected random source (`sample_indices`, `shuffle`, `choice`) |
//! | `generator`   | `generate_questions()` and the seeded `generate_quiz()` |
//! | `similarity`  | Longest-common-block similarity ratio for free-text answers |
//! | `grader`      | `grade()` — one response against one question |
//! | `session`     | `QuizSession` — grade, record, advance, restart, summary |
//! | `vocabulary`  | JSON vocabulary loader with record validation |
//! | `config`      | `QuizConfig` defaults and TOML loading |
//! | `client_view` | JSON views for a client front end (answers stripped) |
//! | `input`       | Numbered terminal input mapped onto options |

pub mod client_view;
pub mod config;
pub mod error;
pub mod generator;
pub mod grader;
pub mod input;
pub mod models;
pub mod random;
pub mod session;
pub mod similarity;
pub mod vocabulary;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_quiz` without reaching into sub-modules.
pub use config::QuizConfig;
pub use error::QuizError;
pub use generator::{generate_questions, generate_quiz};
pub use grader::{grade, grade_default, DEFAULT_PASS_THRESHOLD};
pub use models::{
    AnswerRecord, Question, QuestionKind, QuizRequest, QuizSummary, Rating, Response,
    VocabularyEntry, Verdict,
};
pub use random::RandomSource;
pub use session::{QuizSession, SessionStatus};
pub use similarity::similarity_ratio;
pub use vocabulary::{load_vocabulary, parse_vocabulary, Vocabulary};
