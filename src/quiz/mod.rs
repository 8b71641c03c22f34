//! Deterministic quiz module
//!
//! All round and scoring logic lives here. This module must stay pure:
//! - Randomness only through an injected `Rng`
//! - State changes only through `submit_answer` / `SessionState::new`
//! - No audio, rendering or platform dependencies

pub mod answer;
pub mod error;
pub mod pool;
pub mod round;
pub mod state;
pub mod words;

pub use answer::{AnswerOutcome, submit_answer};
pub use error::QuizError;
pub use pool::{Difficulty, Pool, build_pool};
pub use round::{build_choices, current_word, evaluate};
pub use state::{Reward, STICKERS, SessionPhase, SessionState};
pub use words::{Category, WORD_BANK, WordEntry};

/// RNG used for a quiz session (seedable, non-cryptographic)
pub type QuizRng = rand_pcg::Pcg32;
