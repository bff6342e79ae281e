//! # vocab_quiz
//!
//! A single-session vocabulary quiz: term/definition pairs in, a randomized
//! set of questions out, each answer graded on submission.
//!
//! ## How it works
//!
//! 1. Load a vocabulary with [`load_vocabulary`] (records missing a term or a
//!    definition are dropped and logged).
//! 2. Call [`generate_quiz`] with a [`QuizRequest`], or start a
//!    [`QuizSession`] with any [`RandomSource`]. Each sampled entry becomes a
//!    multiple-choice, single-choice, or open-ended question, drawn uniformly.
//! 3. Feed each [`Response`] to [`QuizSession::submit`]. Choice questions need
//!    an exact match; free text passes at a similarity ratio of 0.80 or more.
//! 4. Read [`QuizSession::summary`] for the score and rating.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use vocab_quiz::{QuizConfig, QuizSession, Response, VocabularyEntry};
//!
//! let vocab = vec![
//!     VocabularyEntry::new("Synergy", "Combined effect greater than the sum of individual effects"),
//!     VocabularyEntry::new("Leverage", "Use of borrowed capital to increase returns"),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = QuizSession::start(&vocab, &QuizConfig::default(), &mut rng).unwrap();
//!
//! while let Some(question) = session.current_question() {
//!     let response = match question.options().first() {
//!         Some(first) if question.kind() == vocab_quiz::QuestionKind::MultipleChoice =>
//!             Response::selections([first.clone()]),
//!         Some(first) => Response::Choice(first.clone()),
//!         None => Response::Text("borrowed capital".to_string()),
//!     };
//!     session.submit(response).unwrap();
//! }
//! println!("{}/{}", session.score(), session.total());
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `vocab_quiz::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_questions, generate_quiz, grade, grade_default, load_vocabulary, parse_vocabulary,
    similarity_ratio, AnswerRecord, Question, QuestionKind, QuizConfig, QuizError, QuizRequest,
    QuizSession, QuizSummary, RandomSource, Rating, Response, SessionStatus, Verdict,
    Vocabulary, VocabularyEntry, DEFAULT_PASS_THRESHOLD,
};
