//! Quiz settings and preferences
//!
//! Settings live for the session only. Native builds can read them from a
//! JSON config file; the browser build receives them from the page.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::quiz::{Category, Difficulty, QuizError};

/// Quiz settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    // === Word selection ===
    /// Word bank category (or `All`)
    pub category: Category,
    /// Word length bucket
    pub difficulty: Difficulty,

    // === Rounds ===
    /// Choices shown per round (2-4)
    pub options_count: u8,
    /// Rounds per session (5, 10 or 15)
    pub total_rounds: u32,
    /// Hide the picture and skip automatic pronunciation
    pub hard_mode: bool,

    // === Audio ===
    /// Speech playback rate (1.0 = normal)
    pub speech_rate: f32,
    /// Click and feedback sounds
    pub sound_effects: bool,
    /// Sound effect volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: Category::All,
            difficulty: Difficulty::Mix,

            options_count: DEFAULT_OPTIONS,
            total_rounds: DEFAULT_ROUNDS,
            hard_mode: false,

            speech_rate: DEFAULT_SPEECH_RATE,
            sound_effects: true,
            volume: 0.8,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, QuizError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field against the values the settings panel offers
    pub fn validate(&self) -> Result<(), QuizError> {
        validate_options_count(self.options_count)?;
        validate_rounds(self.total_rounds)?;
        if !SPEECH_RATE_RANGE.contains(&self.speech_rate) {
            return Err(QuizError::InvalidSpeechRate(self.speech_rate));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(QuizError::InvalidVolume(self.volume));
        }
        Ok(())
    }

    /// Effective sound effect volume (0 when effects are off)
    pub fn effects_volume(&self) -> f32 {
        if self.sound_effects {
            self.volume
        } else {
            0.0
        }
    }

    /// Whether the prompt word is spoken when a round starts
    pub fn auto_speak(&self) -> bool {
        !self.hard_mode
    }
}

pub fn validate_options_count(n: u8) -> Result<(), QuizError> {
    if OPTIONS_RANGE.contains(&n) {
        Ok(())
    } else {
        Err(QuizError::InvalidOptionsCount(n))
    }
}

pub fn validate_rounds(n: u32) -> Result<(), QuizError> {
    if ROUND_CHOICES.contains(&n) {
        Ok(())
    } else {
        Err(QuizError::InvalidRounds(n))
    }
}
