//! Browser audio using the Web Speech and Web Audio APIs
//!
//! Speech goes through `speechSynthesis`; feedback sounds are procedurally
//! generated, no external files needed.

use web_sys::{
    AudioContext, GainNode, OscillatorNode, OscillatorType, SpeechSynthesis,
    SpeechSynthesisUtterance,
};

use super::{AudioOut, SoundEffect};
use crate::consts::SPEECH_LANG;

/// Audio backend for the browser build
pub struct WebAudio {
    ctx: Option<AudioContext>,
    synth: Option<SpeechSynthesis>,
}

impl Default for WebAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl WebAudio {
    pub fn new() -> Self {
        // Either may be missing (insecure context, old browser, webview)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - sound effects disabled");
        }
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speechSynthesis unavailable - speech disabled");
        }
        Self { ctx, synth }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Play a run of notes, `step` seconds apart
    fn play_notes(
        &self,
        ctx: &AudioContext,
        vol: f32,
        freqs: &[f32],
        step: f64,
        osc_type: OscillatorType,
        decay: f64,
    ) {
        for (i, freq) in freqs.iter().enumerate() {
            let delay = i as f64 * step;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, osc_type) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + decay)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + decay + 0.05).ok();
            }
        }
    }

    /// Click - short soft tick
    fn play_click(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 800.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.04)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.06).ok();
    }

    /// Correct - happy rising ding
    fn play_correct(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            vol * 0.25,
            &[600.0, 800.0, 1000.0],
            0.08,
            OscillatorType::Sine,
            0.15,
        );
    }

    /// Wrong - gentle low wobble (never scary)
    fn play_wrong(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.35)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency().set_value_at_time(260.0, t + 0.1).ok();
        osc.frequency().set_value_at_time(220.0, t + 0.2).ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.4).ok();
    }

    /// Sticker - sparkly chime
    fn play_sticker(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            vol * 0.2,
            &[1200.0, 1800.0, 2400.0],
            0.02,
            OscillatorType::Sine,
            0.3,
        );
    }

    /// Finished - triumphant fanfare
    fn play_finished(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            vol * 0.3,
            &[400.0, 500.0, 600.0, 800.0],
            0.1,
            OscillatorType::Triangle,
            0.4,
        );
    }
}

impl AudioOut for WebAudio {
    fn speak(&mut self, text: &str, rate: f32) {
        let Some(synth) = &self.synth else { return };
        let utter = match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("Could not create utterance: {:?}", e);
                return;
            }
        };
        utter.set_lang(SPEECH_LANG);
        utter.set_rate(rate);

        // At most one utterance at a time
        synth.cancel();
        synth.speak(&utter);
    }

    fn play(&mut self, effect: SoundEffect, vol: f32) {
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Click => self.play_click(ctx, vol),
            SoundEffect::Correct => self.play_correct(ctx, vol),
            SoundEffect::Wrong => self.play_wrong(ctx, vol),
            SoundEffect::Sticker => self.play_sticker(ctx, vol),
            SoundEffect::Finished => self.play_finished(ctx, vol),
        }
    }
}
