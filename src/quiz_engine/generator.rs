use std::collections::BTreeSet;

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    error::QuizError,
    models::{Question, QuestionKind, QuizRequest, VocabularyEntry},
    random::RandomSource,
};

/// Most distractors shown next to the correct definition.
pub const MAX_DISTRACTORS: usize = 3;

fn prompt_for(kind: QuestionKind, term: &str) -> String {
    match kind {
        QuestionKind::MultipleChoice =>
            format!("Which statements are true about '{term}'? (several answers possible)"),
        QuestionKind::SingleChoice =>
            format!("What is the definition of '{term}'?"),
        QuestionKind::OpenEnded =>
            format!("Define the term '{term}'."),
    }
}

/// Correct definition plus up to three distractor definitions, shuffled.
///
/// Distractors come from every entry whose term differs from `entry.term`.
/// Duplicate definitions across entries are kept as they are.
fn choice_options<R: RandomSource>(
    rng: &mut R,
    entry: &VocabularyEntry,
    vocabulary: &[VocabularyEntry],
) -> Vec<String> {
    let pool: Vec<&VocabularyEntry> =
        vocabulary.iter().filter(|v| v.term != entry.term).collect();

    let mut options = Vec::with_capacity(1 + MAX_DISTRACTORS.min(pool.len()));
    options.push(entry.definition.clone());
    options.extend(
        rng.sample_indices(pool.len(), MAX_DISTRACTORS)
            .into_iter()
            .map(|i| pool[i].definition.clone()),
    );
    rng.shuffle(&mut options);
    options
}

/// Build one question of a fixed kind for `entry`.
pub fn build_question<R: RandomSource>(
    rng: &mut R,
    kind: QuestionKind,
    entry: &VocabularyEntry,
    vocabulary: &[VocabularyEntry],
) -> Question {
    let term = entry.term.clone();
    let prompt = prompt_for(kind, &entry.term);

    match kind {
        QuestionKind::MultipleChoice => Question::MultipleChoice {
            term,
            prompt,
            correct_answers: BTreeSet::from([entry.definition.clone()]),
            options: choice_options(rng, entry, vocabulary),
        },
        QuestionKind::SingleChoice => Question::SingleChoice {
            term,
            prompt,
            correct_answer: entry.definition.clone(),
            options: choice_options(rng, entry, vocabulary),
        },
        QuestionKind::OpenEnded => Question::OpenEnded {
            term,
            prompt,
            correct_answer: entry.definition.clone(),
        },
    }
}

/// Sample `min(count, |vocabulary|)` distinct entries and turn each into a
/// question of a uniformly drawn kind.
///
/// Kinds are drawn independently per question, so a session may well end up
/// with, say, no open-ended questions at all.
pub fn generate_questions<R: RandomSource>(
    vocabulary: &[VocabularyEntry],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    if vocabulary.is_empty() {
        return Err(QuizError::InsufficientData(
            "cannot generate questions from an empty vocabulary".to_string(),
        ));
    }

    let picked = rng.sample_indices(vocabulary.len(), count);
    debug!(requested = count, pool = vocabulary.len(), picked = picked.len(), "generating questions");

    let questions = picked
        .into_iter()
        .map(|i| {
            let entry = &vocabulary[i];
            let kind = rng
                .choice(QuestionKind::ALL.len())
                .map_or(QuestionKind::OpenEnded, |k| QuestionKind::ALL[k]);
            build_question(rng, kind, entry, vocabulary)
        })
        .collect();

    Ok(questions)
}

/// Seeded entry point: same `rng_seed`, same questions.
pub fn generate_quiz(
    vocabulary: &[VocabularyEntry],
    request: &QuizRequest,
) -> Result<Vec<Question>, QuizError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_questions(vocabulary, request.question_count, &mut rng)
}
