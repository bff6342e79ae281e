//! End-to-end demo of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Seeded generation** — the same seed always yields the same quiz, so
//!    the printed output is reproducible.
//! 2. **Grading** — each question is answered once correctly and once with a
//!    near-miss, showing the verdict and (for free text) the similarity ratio.
//! 3. **Session** — a full session is played with correct answers and the
//!    summary printed.

use rand::{rngs::StdRng, SeedableRng};
use vocab_quiz::{
    generate_quiz, grade_default, parse_vocabulary, Question, QuizConfig, QuizRequest,
    QuizSession, Response,
};

const VOCAB: &str = include_str!("vocab.json");

fn correct(q: &Question) -> Response {
    match q {
        Question::MultipleChoice { correct_answers, .. } => Response::Selections(correct_answers.clone()),
        Question::SingleChoice { correct_answer, .. } => Response::Choice(correct_answer.clone()),
        Question::OpenEnded { correct_answer, .. } => Response::Text(correct_answer.clone()),
    }
}

fn near_miss(q: &Question) -> Response {
    match q {
        Question::MultipleChoice { options, .. } => Response::selections(options.iter().cloned()),
        Question::SingleChoice { correct_answer, .. } => Response::Choice(correct_answer.to_lowercase()),
        Question::OpenEnded { correct_answer, .. } => {
            let words: Vec<&str> = correct_answer.split_whitespace().collect();
            Response::Text(words[..words.len().saturating_sub(2)].join(" "))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vocab = parse_vocabulary(VOCAB)?;
    println!("Loaded {} entries", vocab.len());

    let quiz = generate_quiz(&vocab.entries, &QuizRequest::new().with_count(5).with_seed(42))?;
    for (i, q) in quiz.iter().enumerate() {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  [{}] {}  ({})", i + 1, q.prompt(), q.kind());
        for option in q.options() {
            let marker = if q.expected_answers().contains(&option.as_str()) { "✓" } else { " " };
            println!("    {marker} {option}");
        }
        let good = grade_default(q, &correct(q))?;
        let bad = grade_default(q, &near_miss(q))?;
        println!("  correct answer  → {good:?}");
        println!("  near miss       → {bad:?}");
    }

    let mut rng = StdRng::seed_from_u64(7);
    let mut session = QuizSession::start(&vocab.entries, &QuizConfig::default(), &mut rng)?;
    while let Some(q) = session.current_question() {
        let response = correct(q);
        session.submit(response)?;
    }
    let summary = session.summary();
    println!();
    println!("Session: {}/{} ({:.1}%) {}", summary.score, summary.total, summary.percentage, summary.rating);
    Ok(())
}
