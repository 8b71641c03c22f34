//! Speech and sound-effect boundary
//!
//! The quiz never waits on audio and never sees audio failures. Backends
//! swallow their own errors; a new utterance replaces any in-flight one.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Any choice button pressed
    Click,
    /// Right answer
    Correct,
    /// Wrong answer
    Wrong,
    /// Sticker earned
    Sticker,
    /// Last round answered
    Finished,
}

/// Fire-and-forget audio output
pub trait AudioOut {
    /// Speak `text`, cancelling anything still being spoken
    fn speak(&mut self, text: &str, rate: f32);

    /// Play a sound effect at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// No-op output for headless runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioOut for Silent {
    fn speak(&mut self, text: &str, rate: f32) {
        log::trace!("(silent) speak {text:?} at {rate}");
    }

    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        log::trace!("(silent) play {effect:?}");
    }
}
