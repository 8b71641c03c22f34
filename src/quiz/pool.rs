//! Session word pool
//!
//! A pool is the filtered word bank in a random order. The session walks
//! through it one round at a time.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{Category, QuizError, WordEntry};

/// Word-length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 3-4 letters
    Short,
    /// 5-6 letters
    Medium,
    /// Any length
    #[default]
    Mix,
}

impl Difficulty {
    pub const ALL_CHOICES: [Difficulty; 3] = [Difficulty::Mix, Difficulty::Short, Difficulty::Medium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Short => "Short (3–4 letters)",
            Difficulty::Medium => "Medium (5–6 letters)",
            Difficulty::Mix => "Mix",
        }
    }

    /// Whether a word of `len` letters belongs in this bucket
    pub fn admits(&self, len: usize) -> bool {
        match self {
            Difficulty::Short => len <= 4,
            Difficulty::Medium => (5..=6).contains(&len),
            Difficulty::Mix => true,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "easy" => Ok(Difficulty::Short),
            "medium" | "med" => Ok(Difficulty::Medium),
            "mix" | "mixed" | "any" => Ok(Difficulty::Mix),
            _ => Err(QuizError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Randomly ordered, non-empty sequence of words for one session
#[derive(Debug, Clone)]
pub struct Pool<'a> {
    entries: Vec<&'a WordEntry>,
    category: Category,
}

impl<'a> Pool<'a> {
    pub fn entries(&self) -> &[&'a WordEntry] {
        &self.entries
    }

    /// Always at least 1
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Filter `bank` by category and difficulty, then shuffle uniformly.
///
/// Fails with [`QuizError::EmptyPool`] rather than handing back a pool that
/// cannot produce a round.
pub fn build_pool<'a, R: Rng + ?Sized>(
    category: Category,
    difficulty: Difficulty,
    bank: &'a [WordEntry],
    rng: &mut R,
) -> Result<Pool<'a>, QuizError> {
    let mut entries: Vec<&'a WordEntry> = bank
        .iter()
        .filter(|w| category.admits(w.category) && difficulty.admits(w.letter_count()))
        .collect();

    if entries.is_empty() {
        log::warn!("No words for category={category} difficulty={difficulty}");
        return Err(QuizError::EmptyPool {
            category,
            difficulty,
        });
    }

    entries.shuffle(rng);

    Ok(Pool { entries, category })
}
