//! Browser bindings
//!
//! The page renders; this class holds the session. Every call returns JSON so
//! the page never needs to know the Rust types.

use wasm_bindgen::prelude::*;

use crate::app::Quiz;
use crate::audio::WebAudio;
use crate::quiz::{Category, Difficulty, QuizError};
use crate::settings::Settings;

fn to_js(err: QuizError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("WordQuest Jr loaded");
}

#[wasm_bindgen]
pub struct WordQuest {
    quiz: Quiz,
}

#[wasm_bindgen]
impl WordQuest {
    /// `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WordQuest, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(to_js)?
        };
        let seed = js_sys::Date::now() as u64;
        let quiz = Quiz::new(settings, seed, Box::new(WebAudio::new())).map_err(to_js)?;
        Ok(Self { quiz })
    }

    /// Current round as JSON (`RoundView`)
    pub fn view(&self) -> Result<String, JsValue> {
        json(&self.quiz.view())
    }

    /// Answer with `word`; returns the outcome as JSON
    pub fn pick(&mut self, word: &str) -> Result<String, JsValue> {
        let outcome = self.quiz.pick(word).map_err(to_js)?;
        json(&outcome)
    }

    /// Final results as JSON, or `null` while rounds remain
    pub fn summary(&self) -> Result<String, JsValue> {
        json(&self.quiz.summary())
    }

    pub fn settings(&self) -> Result<String, JsValue> {
        self.quiz.settings().to_json().map_err(to_js)
    }

    pub fn say_word(&mut self) {
        self.quiz.say_word();
    }

    pub fn say_sentence(&mut self) {
        self.quiz.say_sentence();
    }

    pub fn toggle_hint(&mut self) {
        self.quiz.toggle_hint();
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.quiz.reset().map_err(to_js)
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), JsValue> {
        let category: Category = category.parse().map_err(to_js)?;
        self.quiz.set_category(category).map_err(to_js)
    }

    pub fn set_difficulty(&mut self, difficulty: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = difficulty.parse().map_err(to_js)?;
        self.quiz.set_difficulty(difficulty).map_err(to_js)
    }

    pub fn set_options_count(&mut self, n: u8) -> Result<(), JsValue> {
        self.quiz.set_options_count(n).map_err(to_js)
    }

    pub fn set_total_rounds(&mut self, n: u32) -> Result<(), JsValue> {
        self.quiz.set_total_rounds(n).map_err(to_js)
    }

    pub fn set_speech_rate(&mut self, rate: f32) -> Result<(), JsValue> {
        self.quiz.set_speech_rate(rate).map_err(to_js)
    }

    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        self.quiz.set_hard_mode(hard_mode);
    }

    pub fn set_sound_effects(&mut self, enabled: bool) {
        self.quiz.set_sound_effects(enabled);
    }

    /// Category labels for the settings panel, wildcard first
    pub fn categories() -> Vec<String> {
        Category::ALL_CHOICES
            .iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }
}
