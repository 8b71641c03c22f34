//! Quiz session controller
//!
//! `Quiz` owns everything a single player session needs and exposes the only
//! mutation entry points: answering, hints, speech requests, settings
//! changes and reset. Renderers read [`RoundView`] / [`SessionSummary`].

use rand::SeedableRng;
use serde::Serialize;

use crate::audio::{AudioOut, SoundEffect};
use crate::consts::{GOLD_STAR_RATIO, NICE_WORK_RATIO};
use crate::quiz::{
    AnswerOutcome, Category, Difficulty, Pool, QuizError, QuizRng, SessionState, WORD_BANK,
    WordEntry, build_choices, build_pool, current_word, submit_answer,
};
use crate::settings::{Settings, validate_options_count, validate_rounds};

/// End-of-session encouragement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    GoldStar,
    NiceWork,
    KeepPracticing,
}

impl Verdict {
    pub fn for_score(score: u32, total_rounds: u32) -> Self {
        let rounds = f64::from(total_rounds);
        let score = f64::from(score);
        if score >= (rounds * GOLD_STAR_RATIO).floor() {
            Verdict::GoldStar
        } else if score >= (rounds * NICE_WORK_RATIO).floor() {
            Verdict::NiceWork
        } else {
            Verdict::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::GoldStar => "Gold star!",
            Verdict::NiceWork => "Nice work!",
            Verdict::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Final results, available once the last round is answered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub total_rounds: u32,
    pub perfect: bool,
    pub verdict: Verdict,
    pub stickers: Vec<&'static str>,
}

/// Snapshot of what a renderer needs for the current round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundView {
    pub round: u32,
    pub total_rounds: u32,
    pub progress_percent: u32,
    pub score: u32,
    pub streak: u32,
    /// Picture prompt; hidden in hard mode
    pub symbol: Option<&'static str>,
    /// Only present while the hint is shown
    pub hint: Option<&'static str>,
    pub choices: Vec<&'static str>,
    pub stickers: Vec<&'static str>,
    pub finished: bool,
}

/// One player's quiz session
pub struct Quiz {
    settings: Settings,
    pool: Pool<'static>,
    state: SessionState,
    choices: Vec<&'static str>,
    rng: QuizRng,
    audio: Box<dyn AudioOut>,
}

impl Quiz {
    /// Start a session. Fails if the settings are invalid or select no words.
    pub fn new(settings: Settings, seed: u64, audio: Box<dyn AudioOut>) -> Result<Self, QuizError> {
        settings.validate()?;

        let mut rng = QuizRng::seed_from_u64(seed);
        let pool = build_pool(settings.category, settings.difficulty, WORD_BANK, &mut rng)?;

        log::info!(
            "Quiz started: seed={seed} category={} difficulty={} pool={} rounds={}",
            settings.category,
            settings.difficulty,
            pool.len(),
            settings.total_rounds
        );

        let mut quiz = Self {
            settings,
            pool,
            state: SessionState::new(),
            choices: Vec::new(),
            rng,
            audio,
        };
        quiz.start_round();
        Ok(quiz)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pool(&self) -> &Pool<'static> {
        &self.pool
    }

    /// Word being asked for this round
    pub fn current(&self) -> &'static WordEntry {
        current_word(&self.pool, self.state.round_index)
    }

    pub fn choices(&self) -> &[&'static str] {
        &self.choices
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn progress_percent(&self) -> u32 {
        let pct = (f64::from(self.state.round_index) / f64::from(self.settings.total_rounds)
            * 100.0)
            .round() as u32;
        pct.min(100)
    }

    /// Answer the current round with `word`
    pub fn pick(&mut self, word: &str) -> Result<AnswerOutcome, QuizError> {
        if self.state.is_finished() {
            return Err(QuizError::SessionFinished);
        }
        let vol = self.settings.effects_volume();
        self.audio.play(SoundEffect::Click, vol);

        let outcome = submit_answer(
            &mut self.state,
            &self.pool,
            word,
            self.settings.total_rounds,
            &mut self.rng,
        )?;

        let feedback = if outcome.correct {
            SoundEffect::Correct
        } else {
            SoundEffect::Wrong
        };
        self.audio.play(feedback, vol);
        if outcome.reward.is_some() {
            self.audio.play(SoundEffect::Sticker, vol);
        }

        if outcome.finished {
            self.audio.play(SoundEffect::Finished, vol);
            log::info!(
                "Quiz finished: {}/{} with {} stickers",
                self.state.score,
                self.settings.total_rounds,
                self.state.rewards.len()
            );
        } else {
            self.start_round();
        }
        Ok(outcome)
    }

    /// Speak the current word
    pub fn say_word(&mut self) {
        let word = self.current().word;
        self.audio.speak(word, self.settings.speech_rate);
    }

    /// Speak the example sentence for the current word
    pub fn say_sentence(&mut self) {
        let sentence = self.current().example_sentence;
        self.audio.speak(sentence, self.settings.speech_rate);
    }

    pub fn toggle_hint(&mut self) {
        self.state.toggle_hint();
    }

    /// Rebuild the pool and clear all progress
    pub fn reset(&mut self) -> Result<(), QuizError> {
        let pool = build_pool(
            self.settings.category,
            self.settings.difficulty,
            WORD_BANK,
            &mut self.rng,
        )?;
        self.pool = pool;
        self.state = SessionState::new();
        log::info!(
            "Quiz reset: category={} difficulty={} pool={}",
            self.settings.category,
            self.settings.difficulty,
            self.pool.len()
        );
        self.start_round();
        Ok(())
    }

    /// Change category; resets the session. On error nothing changes.
    pub fn set_category(&mut self, category: Category) -> Result<(), QuizError> {
        let previous = self.settings.category;
        self.settings.category = category;
        self.reset().inspect_err(|_| self.settings.category = previous)
    }

    /// Change difficulty; resets the session. On error nothing changes.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), QuizError> {
        let previous = self.settings.difficulty;
        self.settings.difficulty = difficulty;
        self.reset().inspect_err(|_| self.settings.difficulty = previous)
    }

    /// Applies from the next round drawn; progress is kept
    pub fn set_options_count(&mut self, options_count: u8) -> Result<(), QuizError> {
        validate_options_count(options_count)?;
        self.settings.options_count = options_count;
        if !self.state.is_finished() {
            self.choices = self.draw_choices();
        }
        Ok(())
    }

    /// Progress is kept; lowering below the rounds already played ends the session.
    ///
    /// A finished session stays finished even if the count is raised, and its
    /// summary is then reported against the new total. Reset to play more rounds.
    pub fn set_total_rounds(&mut self, total_rounds: u32) -> Result<(), QuizError> {
        validate_rounds(total_rounds)?;
        self.settings.total_rounds = total_rounds;
        if !self.state.is_finished() && self.state.round_index >= total_rounds {
            self.state.phase = crate::quiz::SessionPhase::Finished;
            log::info!("Quiz finished early: rounds lowered to {total_rounds}");
        }
        Ok(())
    }

    /// Leaving hard mode mid-round announces the current word
    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        let was_hard = self.settings.hard_mode;
        self.settings.hard_mode = hard_mode;
        if was_hard && !hard_mode && !self.state.is_finished() {
            self.say_word();
        }
    }

    pub fn set_speech_rate(&mut self, rate: f32) -> Result<(), QuizError> {
        let mut next = self.settings.clone();
        next.speech_rate = rate;
        next.validate()?;
        self.settings = next;
        Ok(())
    }

    pub fn set_sound_effects(&mut self, enabled: bool) {
        self.settings.sound_effects = enabled;
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.state.is_finished() {
            return None;
        }
        let score = self.state.score;
        let total_rounds = self.settings.total_rounds;
        Some(SessionSummary {
            score,
            total_rounds,
            perfect: score == total_rounds,
            verdict: Verdict::for_score(score, total_rounds),
            stickers: self.stickers(),
        })
    }

    pub fn view(&self) -> RoundView {
        let current = self.current();
        RoundView {
            round: self.state.round_index + 1,
            total_rounds: self.settings.total_rounds,
            progress_percent: self.progress_percent(),
            score: self.state.score,
            streak: self.state.streak,
            symbol: (!self.settings.hard_mode).then_some(current.display_symbol),
            hint: self.state.hint_visible.then_some(current.hint),
            choices: self.choices.clone(),
            stickers: self.stickers(),
            finished: self.state.is_finished(),
        }
    }

    fn stickers(&self) -> Vec<&'static str> {
        self.state.rewards.iter().map(|r| r.symbol).collect()
    }

    fn draw_choices(&mut self) -> Vec<&'static str> {
        build_choices(
            self.current(),
            self.settings.category,
            WORD_BANK,
            self.settings.options_count,
            &mut self.rng,
        )
    }

    /// New choices, and the prompt spoken unless hard mode hides it
    fn start_round(&mut self) {
        self.choices = self.draw_choices();
        if self.settings.auto_speak() {
            self.say_word();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::quiz::SessionPhase;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Heard {
        Speech(String),
        Effect(SoundEffect),
    }

    /// Records everything the quiz sends to the speakers
    #[derive(Clone, Default)]
    struct RecordingAudio(Rc<RefCell<Vec<Heard>>>);

    impl AudioOut for RecordingAudio {
        fn speak(&mut self, text: &str, _rate: f32) {
            self.0.borrow_mut().push(Heard::Speech(text.to_string()));
        }

        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.borrow_mut().push(Heard::Effect(effect));
        }
    }

    impl RecordingAudio {
        fn take(&self) -> Vec<Heard> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    fn quiz_with(settings: Settings) -> Quiz {
        Quiz::new(settings, 2024, Box::new(Silent)).unwrap()
    }

    fn answer_right(quiz: &mut Quiz) -> AnswerOutcome {
        let word = quiz.current().word;
        quiz.pick(word).unwrap()
    }

    #[test]
    fn test_five_rounds_all_correct() {
        let mut quiz = quiz_with(Settings {
            total_rounds: 5,
            ..Default::default()
        });
        for _ in 0..5 {
            assert!(answer_right(&mut quiz).correct);
        }

        let state = quiz.state();
        assert_eq!(state.score, 5);
        assert_eq!(state.streak, 5);
        assert_eq!(state.rewards.len(), 1);
        assert_eq!(state.phase, SessionPhase::Finished);

        let summary = quiz.summary().unwrap();
        assert!(summary.perfect);
        assert_eq!(summary.verdict, Verdict::GoldStar);
        assert_eq!(summary.stickers.len(), 1);
        assert!(matches!(quiz.pick("cat"), Err(QuizError::SessionFinished)));
    }

    #[test]
    fn test_choices_always_include_the_answer() {
        let mut quiz = quiz_with(Settings {
            options_count: 4,
            total_rounds: 15,
            ..Default::default()
        });
        while !quiz.is_finished() {
            assert_eq!(quiz.choices().len(), 4);
            assert!(quiz.choices().contains(&quiz.current().word));
            quiz.pick("wrong").unwrap();
        }
        assert_eq!(quiz.state().score, 0);
        assert_eq!(quiz.summary().unwrap().verdict, Verdict::KeepPracticing);
    }

    #[test]
    fn test_category_change_resets_progress() {
        let mut quiz = quiz_with(Settings::default());
        for _ in 0..3 {
            answer_right(&mut quiz);
        }
        assert_eq!(quiz.state().rewards.len(), 1);

        quiz.set_category(Category::Colors).unwrap();
        assert_eq!(quiz.state(), &SessionState::new());
        assert_eq!(quiz.pool().category(), Category::Colors);
        assert_eq!(quiz.current().category, Category::Colors);
    }

    #[test]
    fn test_empty_selection_keeps_old_session() {
        let mut quiz = quiz_with(Settings {
            category: Category::Animals,
            ..Default::default()
        });
        answer_right(&mut quiz);

        let err = quiz.set_difficulty(Difficulty::Medium).unwrap_err();
        assert!(matches!(err, QuizError::EmptyPool { .. }));
        assert_eq!(quiz.settings().difficulty, Difficulty::Mix);
        assert_eq!(quiz.state().score, 1);
    }

    #[test]
    fn test_empty_selection_blocks_start() {
        let result = Quiz::new(
            Settings {
                category: Category::Animals,
                difficulty: Difficulty::Medium,
                ..Default::default()
            },
            1,
            Box::new(Silent),
        );
        assert!(matches!(result, Err(QuizError::EmptyPool { .. })));
    }

    #[test]
    fn test_reset_after_finish() {
        let mut quiz = quiz_with(Settings {
            total_rounds: 5,
            ..Default::default()
        });
        for _ in 0..5 {
            quiz.pick("wrong").unwrap();
        }
        assert!(quiz.is_finished());
        assert!(quiz.summary().is_some());

        quiz.reset().unwrap();
        assert!(!quiz.is_finished());
        assert_eq!(quiz.state().round_index, 0);
        assert!(quiz.summary().is_none());
    }

    #[test]
    fn test_lowering_rounds_can_finish() {
        let mut quiz = quiz_with(Settings::default());
        for _ in 0..6 {
            answer_right(&mut quiz);
        }
        quiz.set_total_rounds(5).unwrap();
        assert!(quiz.is_finished());
        assert_eq!(quiz.state().score, 6);

        assert!(matches!(quiz.set_total_rounds(8), Err(QuizError::InvalidRounds(8))));
    }

    #[test]
    fn test_progress_percent() {
        let mut quiz = quiz_with(Settings {
            total_rounds: 15,
            ..Default::default()
        });
        assert_eq!(quiz.progress_percent(), 0);
        answer_right(&mut quiz);
        assert_eq!(quiz.progress_percent(), 7);
        while !quiz.is_finished() {
            quiz.pick("wrong").unwrap();
        }
        assert_eq!(quiz.progress_percent(), 100);
    }

    #[test]
    fn test_word_is_announced_each_round() {
        let audio = RecordingAudio::default();
        let mut quiz = Quiz::new(Settings::default(), 5, Box::new(audio.clone())).unwrap();
        let first = quiz.current().word;
        assert_eq!(audio.take(), vec![Heard::Speech(first.to_string())]);

        quiz.pick(first).unwrap();
        let second = quiz.current().word;
        assert_eq!(
            audio.take(),
            vec![
                Heard::Effect(SoundEffect::Click),
                Heard::Effect(SoundEffect::Correct),
                Heard::Speech(second.to_string()),
            ]
        );

        quiz.say_sentence();
        assert_eq!(
            audio.take(),
            vec![Heard::Speech(quiz.current().example_sentence.to_string())]
        );
    }

    #[test]
    fn test_hard_mode_hides_picture_and_stays_quiet() {
        let audio = RecordingAudio::default();
        let settings = Settings {
            hard_mode: true,
            total_rounds: 5,
            ..Default::default()
        };
        let mut quiz = Quiz::new(settings, 5, Box::new(audio.clone())).unwrap();
        assert!(audio.take().is_empty());
        assert!(quiz.view().symbol.is_none());

        quiz.pick("wrong").unwrap();
        assert_eq!(
            audio.take(),
            vec![
                Heard::Effect(SoundEffect::Click),
                Heard::Effect(SoundEffect::Wrong)
            ]
        );

        // Asking explicitly still works
        quiz.say_word();
        assert_eq!(audio.take(), vec![Heard::Speech(quiz.current().word.to_string())]);
    }

    #[test]
    fn test_sticker_and_finish_sounds() {
        let audio = RecordingAudio::default();
        let settings = Settings {
            hard_mode: true,
            total_rounds: 5,
            ..Default::default()
        };
        let mut quiz = Quiz::new(settings, 9, Box::new(audio.clone())).unwrap();
        for _ in 0..3 {
            answer_right(&mut quiz);
        }
        assert!(audio.take().contains(&Heard::Effect(SoundEffect::Sticker)));

        for _ in 0..2 {
            quiz.pick("wrong").unwrap();
        }
        let heard = audio.take();
        assert_eq!(heard.last(), Some(&Heard::Effect(SoundEffect::Finished)));
    }

    #[test]
    fn test_hint_in_view() {
        let mut quiz = quiz_with(Settings::default());
        assert!(quiz.view().hint.is_none());
        quiz.toggle_hint();
        assert_eq!(quiz.view().hint, Some(quiz.current().hint));
        quiz.pick("wrong").unwrap();
        assert!(quiz.view().hint.is_none());
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = quiz_with(Settings::default());
        let b = quiz_with(Settings::default());
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(Verdict::for_score(7, 10), Verdict::GoldStar);
        assert_eq!(Verdict::for_score(6, 10), Verdict::NiceWork);
        assert_eq!(Verdict::for_score(5, 10), Verdict::NiceWork);
        assert_eq!(Verdict::for_score(4, 10), Verdict::KeepPracticing);
        // floor(5 * 0.7) = 3
        assert_eq!(Verdict::for_score(3, 5), Verdict::GoldStar);
        assert_eq!(Verdict::for_score(2, 5), Verdict::NiceWork);
    }

    #[test]
    fn test_settings_change_after_finish_resets() {
        let mut quiz = quiz_with(Settings {
            total_rounds: 5,
            ..Default::default()
        });
        for _ in 0..5 {
            answer_right(&mut quiz);
        }
        assert!(quiz.is_finished());

        quiz.set_difficulty(Difficulty::Short).unwrap();
        assert_eq!(quiz.state(), &SessionState::new());
        assert!(!quiz.is_finished());
        assert!(quiz.current().letter_count() <= 4);

        for _ in 0..5 {
            quiz.pick("wrong").unwrap();
        }
        assert!(quiz.is_finished());

        quiz.set_category(Category::Food).unwrap();
        assert_eq!(quiz.state(), &SessionState::new());
        assert!(!quiz.is_finished());
        assert_eq!(quiz.current().category, Category::Food);
        assert!(quiz.current().letter_count() <= 4);
    }

    #[test]
    fn test_raising_rounds_after_finish_stays_finished() {
        let mut quiz = quiz_with(Settings {
            total_rounds: 5,
            ..Default::default()
        });
        for _ in 0..5 {
            answer_right(&mut quiz);
        }
        quiz.set_total_rounds(15).unwrap();
        assert!(quiz.is_finished());
        assert_eq!(quiz.progress_percent(), 33);
        assert!(matches!(quiz.pick("cat"), Err(QuizError::SessionFinished)));

        let summary = quiz.summary().unwrap();
        assert_eq!(summary.total_rounds, 15);
        assert!(!summary.perfect);
    }

    #[test]
    fn test_leaving_hard_mode_announces_word() {
        let audio = RecordingAudio::default();
        let settings = Settings {
            hard_mode: true,
            ..Default::default()
        };
        let mut quiz = Quiz::new(settings, 3, Box::new(audio.clone())).unwrap();
        assert!(audio.take().is_empty());

        quiz.set_hard_mode(true);
        assert!(audio.take().is_empty());

        quiz.set_hard_mode(false);
        assert_eq!(audio.take(), vec![Heard::Speech(quiz.current().word.to_string())]);

        // Already out of hard mode: nothing new to say
        quiz.set_hard_mode(false);
        assert!(audio.take().is_empty());
        quiz.set_hard_mode(true);
        assert!(audio.take().is_empty());
    }

    #[test]
    fn test_speech_rate_setting() {
        let mut quiz = quiz_with(Settings::default());
        quiz.set_speech_rate(1.25).unwrap();
        assert!((quiz.settings().speech_rate - 1.25).abs() < f32::EPSILON);

        assert!(matches!(
            quiz.set_speech_rate(3.0),
            Err(QuizError::InvalidSpeechRate(_))
        ));
        assert!((quiz.settings().speech_rate - 1.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_options_count_validated() {
        let mut quiz = quiz_with(Settings::default());
        assert!(matches!(
            quiz.set_options_count(5),
            Err(QuizError::InvalidOptionsCount(5))
        ));
        quiz.set_options_count(4).unwrap();
        assert_eq!(quiz.choices().len(), 4);
    }
}
