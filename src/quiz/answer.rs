//! Answer submission
//!
//! The single transition that advances a session.

use rand::Rng;
use serde::Serialize;

use super::round::{current_word, evaluate};
use super::state::{Reward, SessionPhase, SessionState};
use super::{Pool, QuizError};
use crate::consts::REWARD_EVERY;

/// What happened on one answer (for feedback sounds and animations)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The word that was being asked for
    pub expected: &'static str,
    /// Sticker earned by this answer, if any
    pub reward: Option<Reward>,
    /// This answer completed the final round
    pub finished: bool,
}

/// Score `selected` against the current round and advance the session
pub fn submit_answer<R: Rng + ?Sized>(
    state: &mut SessionState,
    pool: &Pool<'static>,
    selected: &str,
    total_rounds: u32,
    rng: &mut R,
) -> Result<AnswerOutcome, QuizError> {
    if state.is_finished() {
        return Err(QuizError::SessionFinished);
    }

    let current = current_word(pool, state.round_index);
    let correct = evaluate(selected, current);

    let mut reward = None;
    if correct {
        state.score += 1;
        state.streak += 1;
        if state.score % REWARD_EVERY == 0 {
            let sticker = Reward::draw(rng);
            state.rewards.push(sticker);
            reward = Some(sticker);
        }
    } else {
        state.streak = 0;
    }

    state.round_index += 1;
    if state.round_index >= total_rounds {
        state.phase = SessionPhase::Finished;
    } else {
        state.hint_visible = false;
    }

    log::debug!(
        "Round {} answered '{}' (expected '{}'): correct={} score={} streak={}",
        state.round_index,
        selected,
        current.word,
        correct,
        state.score,
        state.streak
    );

    Ok(AnswerOutcome {
        correct,
        expected: current.word,
        reward,
        finished: state.is_finished(),
    })
}
