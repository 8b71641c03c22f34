//! Session state and core quiz types
//!
//! Everything the presentation layer reads between answers lives here.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Sticker symbols handed out as rewards
pub const STICKERS: [&str; 10] = ["🌟", "🏅", "🎉", "🦄", "🐣", "🍭", "🧸", "🪄", "🚀", "🍪"];

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Rounds remain
    InProgress,
    /// All rounds answered; only a reset leaves this phase
    Finished,
}

/// A cosmetic sticker earned for every third correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub symbol: &'static str,
}

impl Reward {
    /// Pick a sticker uniformly from [`STICKERS`]
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let symbol = STICKERS.choose(rng).copied().unwrap_or(STICKERS[0]);
        Self { symbol }
    }
}

/// Score-keeping for one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Current round (0-based, never decreases)
    pub round_index: u32,
    /// Correct answers so far
    pub score: u32,
    /// Consecutive correct answers
    pub streak: u32,
    /// Stickers in the order they were earned
    pub rewards: Vec<Reward>,
    pub phase: SessionPhase,
    /// Transient "hint shown" flag, hidden again each round
    pub hint_visible: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            round_index: 0,
            score: 0,
            streak: 0,
            rewards: Vec::new(),
            phase: SessionPhase::InProgress,
            hint_visible: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn toggle_hint(&mut self) {
        if !self.is_finished() {
            self.hint_visible = !self.hint_visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_session_is_blank() {
        let state = SessionState::new();
        assert_eq!(state.round_index, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.streak, 0);
        assert!(state.rewards.is_empty());
        assert_eq!(state.phase, SessionPhase::InProgress);
        assert!(!state.hint_visible);
    }

    #[test]
    fn test_hint_toggle() {
        let mut state = SessionState::new();
        state.toggle_hint();
        assert!(state.hint_visible);
        state.toggle_hint();
        assert!(!state.hint_visible);

        state.phase = SessionPhase::Finished;
        state.toggle_hint();
        assert!(!state.hint_visible);
    }

    #[test]
    fn test_reward_draws_from_sticker_set() {
        let mut rng = QuizRng::seed_from_u64(77);
        for _ in 0..50 {
            let reward = Reward::draw(&mut rng);
            assert!(STICKERS.contains(&reward.symbol));
        }
    }
}
