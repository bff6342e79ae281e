//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vocab_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vocab-quiz").unwrap()
}

fn write_vocab(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("vocab.json");
    std::fs::write(&path, body).unwrap();
    path
}

const SINGLE: &str = r#"{ "vocabulary": [
    { "term": "Synergy", "definition": "Combined effect greater than the sum of individual effects" }
] }"#;

const SEVERAL: &str = r#"{ "vocabulary": [
    { "term": "Synergy", "definition": "Combined effect greater than the sum of individual effects" },
    { "term": "Leverage", "definition": "Use of borrowed capital to increase potential returns" },
    { "term": "Benchmark", "definition": "Standard point of reference for comparison" },
    { "term": "Deadline", "definition": "Latest time by which something must be completed" },
    { "term": "Broken" }
] }"#;

#[test]
fn plays_a_one_question_quiz() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SINGLE);
    vocab_quiz()
        .arg("--vocab")
        .arg(&vocab)
        .args(["--seed", "7"])
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 1"))
        .stdout(predicate::str::contains("Synergy"))
        .stdout(predicate::str::contains("Quiz finished!"))
        .stdout(predicate::str::contains("Score: "));
}

#[test]
fn preview_prints_questions_without_answers() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SEVERAL);
    let output = vocab_quiz()
        .arg("--vocab")
        .arg(&vocab)
        .args(["--seed", "3", "--count", "3", "--preview"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped 1 malformed"))
        .get_output()
        .stdout
        .clone();

    let preview: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let questions = preview.as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for q in questions {
        assert!(q.get("correct_answer").is_none());
        assert!(q.get("correct_answers").is_none());
        assert!(q["prompt"].as_str().unwrap().contains(q["term"].as_str().unwrap()));
    }
}

#[test]
fn same_seed_same_preview() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SEVERAL);
    let run = || {
        vocab_quiz()
            .arg("--vocab")
            .arg(&vocab)
            .args(["--seed", "11", "--preview"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn config_file_sets_question_count() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SEVERAL);
    let config = dir.path().join("quiz.toml");
    std::fs::write(
        &config,
        format!("question_count = 2\nvocabulary_path = {:?}\n", vocab.display().to_string()),
    )
    .unwrap();

    let output = vocab_quiz()
        .arg("--config")
        .arg(&config)
        .args(["--seed", "5", "--preview"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let preview: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(preview.as_array().unwrap().len(), 2);
}

#[test]
fn missing_vocabulary_file_fails() {
    vocab_quiz()
        .args(["--vocab", "/nonexistent/vocab.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn vocabulary_without_valid_records_fails() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, r#"{ "vocabulary": [ { "term": "Orphan" } ] }"#);
    vocab_quiz()
        .arg("--vocab")
        .arg(&vocab)
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient vocabulary data"));
}

#[test]
fn out_of_range_threshold_fails() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SINGLE);
    vocab_quiz()
        .arg("--vocab")
        .arg(&vocab)
        .args(["--threshold", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass_threshold"));
}

#[test]
fn rust_log_raises_crate_log_level() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SEVERAL);
    vocab_quiz()
        .env("RUST_LOG", "vocab_quiz=debug")
        .arg("--vocab")
        .arg(&vocab)
        .args(["--seed", "1", "--preview"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generating questions"));
}

#[test]
fn default_log_level_hides_debug_events() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, SEVERAL);
    vocab_quiz()
        .env_remove("RUST_LOG")
        .arg("--vocab")
        .arg(&vocab)
        .args(["--seed", "1", "--preview"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generating questions").not())
        .stderr(predicate::str::contains("skipping vocabulary record"));
}
