//! WordQuest Jr - a picture-and-sound word quiz for young readers
//!
//! Core modules:
//! - `quiz`: Deterministic quiz logic (word bank, pools, rounds, scoring)
//! - `app`: Session controller wiring settings, quiz state, RNG and audio
//! - `audio`: Speech and sound-effect boundary (Web Audio / no-op)
//! - `settings`: Player-facing configuration
//! - `web`: Browser bindings (wasm32 only)

pub mod app;
pub mod audio;
pub mod quiz;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{Quiz, RoundView, SessionSummary, Verdict};
pub use audio::{AudioOut, Silent, SoundEffect};
pub use quiz::{Category, Difficulty, QuizError, WordEntry};
pub use settings::Settings;

/// Quiz configuration constants
pub mod consts {
    /// Choices-per-round values offered by the settings panel
    pub const OPTIONS_RANGE: std::ops::RangeInclusive<u8> = 2..=4;
    pub const DEFAULT_OPTIONS: u8 = 3;

    /// Round counts offered by the settings panel
    pub const ROUND_CHOICES: [u32; 3] = [5, 10, 15];
    pub const DEFAULT_ROUNDS: u32 = 10;

    /// Every third cumulative correct answer earns a sticker
    pub const REWARD_EVERY: u32 = 3;

    /// Slightly slower than normal speech for little listeners
    pub const DEFAULT_SPEECH_RATE: f32 = 0.95;
    pub const SPEECH_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;
    pub const SPEECH_LANG: &str = "en-GB";

    /// Share of rounds needed for the end-of-session verdicts
    pub const GOLD_STAR_RATIO: f64 = 0.7;
    pub const NICE_WORK_RATIO: f64 = 0.5;
}
