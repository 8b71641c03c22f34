//! Quiz error types

use super::{Category, Difficulty};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The category/difficulty filter left no words to play with
    #[error("no words match category {category} with difficulty {difficulty}")]
    EmptyPool {
        category: Category,
        difficulty: Difficulty,
    },

    #[error("the session is finished; reset to play again")]
    SessionFinished,

    #[error("choices per round must be between 2 and 4 (got {0})")]
    InvalidOptionsCount(u8),

    #[error("rounds must be one of 5, 10 or 15 (got {0})")]
    InvalidRounds(u32),

    #[error("speech rate must be between 0.5 and 2.0 (got {0})")]
    InvalidSpeechRate(f32),

    #[error("volume must be between 0.0 and 1.0 (got {0})")]
    InvalidVolume(f32),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
