//! vocab-quiz — interactive terminal front end for the quiz engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use vocab_quiz::quiz_engine::{
    client_view::quiz_preview,
    input::{parse_choice, parse_selection},
};
use vocab_quiz::{
    load_vocabulary, Question, QuizConfig, QuizError, QuizSession, Response, VocabularyEntry,
};

#[derive(Parser)]
#[command(name = "vocab-quiz", version, about = "Vocabulary quiz in the terminal")]
struct Cli {
    /// Vocabulary JSON file (overrides the config file)
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Number of questions per session
    #[arg(long)]
    count: Option<usize>,

    /// Similarity required for free-text answers, in (0, 1]
    #[arg(long)]
    threshold: Option<f64>,

    /// RNG seed for a reproducible quiz
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the generated quiz as JSON (answers stripped) and exit
    #[arg(long)]
    preview: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vocab_quiz=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn resolve_config(cli: &Cli) -> Result<QuizConfig> {
    let mut config = match &cli.config {
        Some(path) => QuizConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => QuizConfig::default(),
    };
    if let Some(vocab) = &cli.vocab {
        config.vocabulary_path = vocab.clone();
    }
    if let Some(count) = cli.count {
        config.question_count = count;
    }
    if let Some(threshold) = cli.threshold {
        config.pass_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let vocabulary = load_vocabulary(&config.vocabulary_path)
        .with_context(|| format!("loading vocabulary {}", config.vocabulary_path.display()))?;
    if !vocabulary.rejected.is_empty() {
        eprintln!("Skipped {} malformed vocabulary record(s)", vocabulary.rejected.len());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::start(&vocabulary.entries, &config, &mut rng)?;

    if cli.preview {
        let preview = quiz_preview(session.questions(), config.pass_threshold);
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut term = Terminal { input: stdin.lock(), output: io::stdout() };
    term.play(&mut session, &vocabulary.entries, &mut rng)
}

struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    /// Next input line without its line ending; `None` on EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn play(
        &mut self,
        session: &mut QuizSession,
        vocabulary: &[VocabularyEntry],
        rng: &mut StdRng,
    ) -> Result<()> {
        loop {
            while let Some(question) = session.current_question().cloned() {
                writeln!(
                    self.output,
                    "\nQuestion {} of {} ({:.0}% done)",
                    session.current_index() + 1,
                    session.total(),
                    session.progress() * 100.0
                )?;
                let Some(response) = self.ask(&question, session.pass_threshold())? else {
                    writeln!(self.output, "\nInput closed, leaving the quiz.")?;
                    return Ok(());
                };
                match session.submit(response) {
                    Ok(record) => {
                        let record = record.clone();
                        self.feedback(&question, record.correct, record.similarity)?;
                    }
                    Err(e) if e.is_recoverable() => writeln!(self.output, "{e}")?,
                    Err(e) => return Err(e.into()),
                }
            }

            self.results(session)?;
            write!(self.output, "\nRestart the quiz? [y/N] ")?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    session.restart(vocabulary, rng)?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Prompt until the input maps onto the options; `None` on EOF.
    fn ask(&mut self, question: &Question, threshold: f64) -> Result<Option<Response>> {
        writeln!(self.output, "{}", question.prompt())?;
        for (i, option) in question.options().iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option)?;
        }

        loop {
            match question {
                Question::MultipleChoice { .. } =>
                    write!(self.output, "Select every correct answer (e.g. 1,3): ")?,
                Question::SingleChoice { .. } =>
                    write!(self.output, "Select one answer: ")?,
                Question::OpenEnded { .. } => write!(
                    self.output,
                    "Your answer (at least {:.0}% similarity required): ",
                    threshold * 100.0
                )?,
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let parsed = match question {
                Question::MultipleChoice { options, .. } =>
                    parse_selection(&line, options).map(Response::Selections),
                Question::SingleChoice { options, .. } =>
                    parse_choice(&line, options).map(Response::Choice),
                Question::OpenEnded { .. } if line.trim().is_empty() =>
                    Err(QuizError::EmptySubmission),
                Question::OpenEnded { .. } => Ok(Response::Text(line)),
            };
            match parsed {
                Ok(response) => return Ok(Some(response)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn feedback(&mut self, question: &Question, correct: bool, similarity: Option<f64>) -> Result<()> {
        let similarity = similarity
            .map(|s| format!(" (similarity: {:.1}%)", s * 100.0))
            .unwrap_or_default();
        if correct {
            writeln!(self.output, "Correct!{similarity}")?;
        } else {
            writeln!(self.output, "Incorrect.{similarity}")?;
            writeln!(self.output, "Expected: {}", question.expected_answers().join(" | "))?;
        }
        Ok(())
    }

    fn results(&mut self, session: &QuizSession) -> Result<()> {
        let summary = session.summary();
        writeln!(self.output, "\nQuiz finished!")?;
        writeln!(
            self.output,
            "Score: {}/{}  ({:.1}%)  {}",
            summary.score, summary.total, summary.percentage, summary.rating
        )?;

        for (i, question) in session.questions().iter().enumerate() {
            let Some(record) = session.answer(i) else {
                continue;
            };
            let mark = if record.correct { "+" } else { "-" };
            writeln!(self.output, "  [{mark}] Question {}: {}", i + 1, question.prompt())?;
            if let (false, Some(similarity)) = (record.correct, record.similarity) {
                writeln!(self.output, "      Your answer: {}", record.user_answer)?;
                writeln!(self.output, "      Similarity: {:.1}%", similarity * 100.0)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vocab_quiz::quiz_engine::models::QuestionKind;

    fn one_question(kind: QuestionKind) -> QuizSession {
        let vocab = vec![VocabularyEntry::new("Synergy", "combined effect")];
        let mut rng = StdRng::seed_from_u64(1);
        let q = vocab_quiz::quiz_engine::generator::build_question(&mut rng, kind, &vocab[0], &vocab);
        QuizSession::from_questions(vec![q], 0.8)
    }

    fn play(session: &mut QuizSession, input: &str) -> String {
        let vocab = vec![VocabularyEntry::new("Synergy", "combined effect")];
        let mut rng = StdRng::seed_from_u64(2);
        let mut term = Terminal { input: Cursor::new(input.to_string()), output: Vec::new() };
        term.play(session, &vocab, &mut rng).unwrap();
        String::from_utf8(term.output).unwrap()
    }

    #[test]
    fn blank_free_text_reprompts() {
        let mut session = one_question(QuestionKind::OpenEnded);
        let out = play(&mut session, "\n  \nCombined Effect\nn\n");
        assert!(out.contains("empty answer"));
        assert!(out.contains("Correct! (similarity: 100.0%)"));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn invalid_option_number_reprompts() {
        let mut session = one_question(QuestionKind::SingleChoice);
        let out = play(&mut session, "7\n1\n");
        assert!(out.contains("out of range"));
        assert!(out.contains("Score: 1/1"));
    }

    #[test]
    fn restart_runs_a_fresh_session() {
        let mut session = one_question(QuestionKind::MultipleChoice);
        let out = play(&mut session, "1\ny\n1\nn\n");
        assert_eq!(out.matches("Quiz finished!").count(), 2);
    }

    #[test]
    fn results_list_missed_free_text_answers() {
        let mut session = one_question(QuestionKind::OpenEnded);
        let out = play(&mut session, "something else\nn\n");
        assert!(out.contains("Score: 0/1"));
        assert!(out.contains("  [-] Question 1: Define the term 'Synergy'."));
        assert!(out.contains("      Your answer: something else"));
        assert!(out.contains("      Similarity: "));
    }

    #[test]
    fn results_mark_correct_choices_without_similarity() {
        let mut session = one_question(QuestionKind::SingleChoice);
        let out = play(&mut session, "1\nn\n");
        assert!(out.contains("  [+] Question 1: What is the definition of 'Synergy'?"));
        assert!(!out.contains("Your answer:"));
    }

    #[test]
    fn eof_leaves_cleanly() {
        let mut session = one_question(QuestionKind::OpenEnded);
        let out = play(&mut session, "");
        assert!(out.contains("Input closed"));
        assert!(!session.is_finished());
    }
}
