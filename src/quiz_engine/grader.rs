use crate::quiz_engine::{
    error::QuizError,
    models::{Question, Response, Verdict},
    similarity::similarity_ratio,
};

/// Minimum similarity for a free-text answer to count as correct.
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.80;

/// Grade one response against its question.
///
/// - multiple choice: the selected set must equal the correct set exactly
/// - single choice: exact, case-sensitive string match
/// - open ended: similarity of the normalized strings `>= threshold`;
///   a blank answer is an [`QuizError::EmptySubmission`]
pub fn grade(question: &Question, response: &Response, threshold: f64) -> Result<Verdict, QuizError> {
    match (question, response) {
        (Question::MultipleChoice { correct_answers, .. }, Response::Selections(selected)) => {
            Ok(Verdict { correct: selected == correct_answers, similarity: None })
        }
        (Question::SingleChoice { correct_answer, .. }, Response::Choice(choice)) => {
            Ok(Verdict { correct: choice == correct_answer, similarity: None })
        }
        (Question::OpenEnded { correct_answer, .. }, Response::Text(text)) => {
            if text.trim().is_empty() {
                return Err(QuizError::EmptySubmission);
            }
            let similarity = similarity_ratio(text, correct_answer);
            Ok(Verdict { correct: similarity >= threshold, similarity: Some(similarity) })
        }
        (q, _) => Err(QuizError::ResponseMismatch { expected: q.kind() }),
    }
}

pub fn grade_default(question: &Question, response: &Response) -> Result<Verdict, QuizError> {
    grade(question, response, DEFAULT_PASS_THRESHOLD)
}
