use rand::Rng;
use serde::Serialize;

use crate::db::{Flag, Word};

const DISTRACTOR_COUNT: usize = 3;

/// One multiple-choice question: the English term, its correct Japanese
/// translation, and three wrong options drawn from the shared pool.
#[derive(Debug, Clone, Serialize)]
pub struct QuizItem {
    pub id: i64,
    pub english: String,
    pub correct: String,
    pub incorrect_1: String,
    pub incorrect_2: String,
    pub incorrect_3: String,
    pub bookmark_flag: Flag,
}

/// Builds one quiz item per word. Distractors are drawn uniformly at random
/// from `pool`; a draw is accepted only if it differs from the word's correct
/// translation and from every distractor already accepted, so the three wrong
/// options are always distinct whole terms.
///
/// The pool must contain at least three distinct values that differ from each
/// correct translation, otherwise the draw loop never terminates. Callers feed
/// the full set of stored translations, which satisfies this for any real
/// vocabulary beyond a handful of words.
pub fn build_quiz(words: &[Word], pool: &[String], rng: &mut impl Rng) -> Vec<QuizItem> {
    words.iter().map(|word| quiz_item(word, pool, rng)).collect()
}

fn quiz_item(word: &Word, pool: &[String], rng: &mut impl Rng) -> QuizItem {
    let mut accepted: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT);

    while accepted.len() < DISTRACTOR_COUNT {
        let candidate = pool[rng.random_range(0..pool.len())].as_str();
        if candidate != word.japanese && !accepted.contains(&candidate) {
            accepted.push(candidate);
        }
    }

    QuizItem {
        id: word.id,
        english: word.english.clone(),
        correct: word.japanese.clone(),
        incorrect_1: accepted[0].to_string(),
        incorrect_2: accepted[1].to_string(),
        incorrect_3: accepted[2].to_string(),
        bookmark_flag: word.bookmark,
    }
}
