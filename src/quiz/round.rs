//! Round engine: prompt word, multiple-choice options and answer checking

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Category, Pool, WordEntry};

/// Minimum number of distractors requested per round
const MIN_DISTRACTORS: usize = 2;

/// Word for a given round.
///
/// Wraps around when the session has more rounds than the pool has words,
/// so words may repeat within a session.
pub fn current_word<'a>(pool: &Pool<'a>, round_index: u32) -> &'a WordEntry {
    let entries = pool.entries();
    entries[round_index as usize % entries.len()]
}

/// Build the shuffled answer options for `current`.
///
/// Distractors come from the same category scope as the session. When the
/// scope is too small the choice set shrinks instead of failing.
pub fn build_choices<'a, R: Rng + ?Sized>(
    current: &'a WordEntry,
    category: Category,
    bank: &'a [WordEntry],
    options_count: u8,
    rng: &mut R,
) -> Vec<&'a str> {
    let mut candidates: Vec<&'a str> = bank
        .iter()
        .filter(|w| category.admits(w.category) && w.word != current.word)
        .map(|w| w.word)
        .collect();
    candidates.shuffle(rng);

    let wanted = MIN_DISTRACTORS.max(usize::from(options_count).saturating_sub(1));
    if candidates.len() < wanted {
        log::debug!(
            "Only {} distractors for '{}' in {category} (wanted {wanted})",
            candidates.len(),
            current.word
        );
    }
    candidates.truncate(wanted);

    candidates.push(current.word);
    candidates.shuffle(rng);
    candidates
}

/// Exact match against the prompt word
pub fn evaluate(selected: &str, current: &WordEntry) -> bool {
    selected == current.word
}
