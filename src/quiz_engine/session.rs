//! One quiz attempt from the first question to the final score.
//!
//! States are `InProgress(i)` and `Finished`. Each valid submission is graded,
//! recorded under the current index, and then advances the index by one; the
//! session becomes `Finished` once the index reaches the question count.
//! Rejected submissions (blank text, wrong response shape) leave every field
//! untouched. `Finished` only leaves through [`QuizSession::restart`].

use std::collections::BTreeMap;

use tracing::info;

use crate::quiz_engine::{
    config::QuizConfig,
    error::QuizError,
    generator::generate_questions,
    grader::grade,
    models::{AnswerRecord, Question, QuizSummary, Rating, Response, VocabularyEntry},
    random::RandomSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress(usize),
    Finished,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    answers: BTreeMap<usize, AnswerRecord>,
    finished: bool,
    question_count: usize,
    pass_threshold: f64,
}

impl QuizSession {
    /// Generate a fresh question set and enter `InProgress(0)`.
    pub fn start<R: RandomSource>(
        vocabulary: &[VocabularyEntry],
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let questions = generate_questions(vocabulary, config.question_count, rng)?;
        let mut session = Self::from_questions(questions, config.pass_threshold);
        session.question_count = config.question_count;
        Ok(session)
    }

    /// Session over an already generated question set.
    pub fn from_questions(questions: Vec<Question>, pass_threshold: f64) -> Self {
        let finished = questions.is_empty();
        QuizSession {
            question_count: questions.len(),
            questions,
            current_index: 0,
            score: 0,
            answers: BTreeMap::new(),
            finished,
            pass_threshold,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.finished {
            SessionStatus::Finished
        } else {
            SessionStatus::InProgress(self.current_index)
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answers(&self) -> &BTreeMap<usize, AnswerRecord> {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&index)
    }

    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }

    /// Share of questions answered so far, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            1.0
        } else {
            self.current_index as f64 / self.questions.len() as f64
        }
    }

    /// Grade, record, then advance.
    pub fn submit(&mut self, response: Response) -> Result<&AnswerRecord, QuizError> {
        let question = self.current_question().ok_or(QuizError::SessionFinished)?;
        let verdict = grade(question, &response, self.pass_threshold)?;

        let index = self.current_index;
        if verdict.correct {
            self.score += 1;
        }
        self.answers.insert(
            index,
            AnswerRecord {
                user_answer: response,
                correct: verdict.correct,
                similarity: verdict.similarity,
            },
        );

        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            self.finished = true;
            info!(score = self.score, total = self.questions.len(), "quiz finished");
        }

        Ok(&self.answers[&index])
    }

    /// Clear all progress and draw a new question set of the same size.
    pub fn restart<R: RandomSource>(
        &mut self,
        vocabulary: &[VocabularyEntry],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        let questions = generate_questions(vocabulary, self.question_count, rng)?;
        self.finished = questions.is_empty();
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        Ok(())
    }

    pub fn summary(&self) -> QuizSummary {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0.0
        } else {
            self.score as f64 / total as f64 * 100.0
        };
        QuizSummary {
            score: self.score,
            total,
            percentage,
            rating: Rating::from_percentage(percentage),
        }
    }
}
