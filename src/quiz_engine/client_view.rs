use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{Question, QuestionKind},
    session::QuizSession,
};

/// Instruction line shown under the prompt.
fn hint(kind: QuestionKind, threshold: f64) -> String {
    match kind {
        QuestionKind::MultipleChoice => "Select every correct answer".to_string(),
        QuestionKind::SingleChoice   => "Select exactly one answer".to_string(),
        QuestionKind::OpenEnded      => format!(
            "Write your answer (at least {:.0}% similarity required)",
            threshold * 100.0
        ),
    }
}

/// One question as the client sees it. Correct answers are never included.
pub fn question_view(question: &Question, index: usize, total: usize, threshold: f64) -> Value {
    let mut view = json!({
        "index":  index,
        "number": index + 1,
        "total":  total,
        "type":   question.kind(),
        "term":   question.term(),
        "prompt": question.prompt(),
        "hint":   hint(question.kind(), threshold),
    });
    if question.kind() != QuestionKind::OpenEnded {
        view["options"] = json!(question.options());
    }
    view
}

/// Every question of a freshly generated quiz, answers stripped.
pub fn quiz_preview(questions: &[Question], threshold: f64) -> Value {
    let total = questions.len();
    Value::Array(
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| question_view(q, i, total, threshold))
            .collect(),
    )
}

/// Final score plus a per-question breakdown.
pub fn results_view(session: &QuizSession) -> Value {
    let summary = session.summary();

    let details: Vec<Value> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let record = session.answer(i);
            json!({
                "index":       i,
                "prompt":      q.prompt(),
                "answered":    record.is_some(),
                "correct":     record.map(|r| r.correct).unwrap_or(false),
                "user_answer": record.map(|r| r.user_answer.to_string()),
                "similarity":  record.and_then(|r| r.similarity),
                "expected":    q.expected_answers(),
            })
        })
        .collect();

    json!({
        "score":      summary.score,
        "total":      summary.total,
        "percentage": summary.percentage,
        "rating":     summary.rating.to_string(),
        "finished":   session.is_finished(),
        "details":    details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Response;
    use std::collections::BTreeSet;

    fn mc() -> Question {
        Question::MultipleChoice {
            term: "Synergy".into(),
            prompt: "Which statements are true about 'Synergy'?".into(),
            correct_answers: BTreeSet::from(["combined effect".to_string()]),
            options: vec!["combined effect".into(), "borrowed capital".into()],
        }
    }

    #[test]
    fn question_view_hides_correct_answers() {
        let view = question_view(&mc(), 0, 3, 0.8);
        assert_eq!(view["type"], "multiple_choice");
        assert_eq!(view["number"], 1);
        assert_eq!(view["options"].as_array().unwrap().len(), 2);
        assert!(view.get("correct_answers").is_none());
        assert!(!view.to_string().contains("\"expected\""));
    }

    #[test]
    fn open_ended_view_has_no_options() {
        let q = Question::OpenEnded {
            term: "Leverage".into(),
            prompt: "Define the term 'Leverage'.".into(),
            correct_answer: "borrowed capital".into(),
        };
        let view = question_view(&q, 2, 3, 0.8);
        assert!(view.get("options").is_none());
        assert!(view["hint"].as_str().unwrap().contains("80%"));
        assert!(!view.to_string().contains("borrowed capital"));
    }

    #[test]
    fn results_view_reports_each_answer() {
        let mut session = QuizSession::from_questions(vec![mc()], 0.8);
        session.submit(Response::selections(["combined effect"])).unwrap();
        let view = results_view(&session);
        assert_eq!(view["score"], 1);
        assert_eq!(view["rating"], "Excellent");
        assert_eq!(view["details"][0]["correct"], true);
        assert_eq!(view["details"][0]["user_answer"], "combined effect");
        assert!(view["details"][0]["similarity"].is_null());
    }

    #[test]
    fn preview_lists_every_question() {
        let preview = quiz_preview(&[mc(), mc()], 0.8);
        assert_eq!(preview.as_array().unwrap().len(), 2);
        assert_eq!(preview[1]["index"], 1);
    }
}
