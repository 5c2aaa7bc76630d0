//! Typewriter phrase loop.
//!
//! ```text
//! Typing ──(phrase complete)──▶ Pausing ──(pause elapsed)──▶ Deleting
//!    ▲                                                          │
//!    └──────────────(text empty, next phrase)───────────────────┘
//! ```
//!
//! The effect owns no timer. A driver waits [`TypingEffect::delay`], calls
//! [`TypingEffect::tick`], and repeats; dropping the driver stops the loop.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("at least one phrase is required")]
    NoPhrases,
}

/// Upper bound on steps taken by a single [`TypingEffect::advance`] call
pub const MAX_STEPS_PER_ADVANCE: usize = 10_000;

/// Reject phrase lists the effect cannot cycle through
pub fn check_phrases(phrases: &[String]) -> Result<(), TypingError> {
    if phrases.is_empty() {
        return Err(TypingError::NoPhrases);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Pausing,
    Deleting,
}

/// Step timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    /// Delay before each typed character
    pub typing_speed: Duration,
    /// Delay before each deleted character
    pub deleting_speed: Duration,
    /// How long a complete phrase stays on screen
    pub pause_duration: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(100),
            deleting_speed: Duration::from_millis(50),
            pause_duration: Duration::from_millis(2000),
        }
    }
}

/// State of one typing-text instance
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    config: TypingConfig,
    index: usize,
    /// Characters of the current phrase on screen
    shown: usize,
    phase: TypingPhase,
    /// Time accumulated toward the next step, for [`TypingEffect::advance`]
    pending: Duration,
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>, config: TypingConfig) -> Result<Self, TypingError> {
        check_phrases(&phrases)?;
        let mut effect = Self {
            phrases,
            config,
            index: 0,
            shown: 0,
            phase: TypingPhase::Typing,
            pending: Duration::ZERO,
        };
        effect.enter_phrase(0);
        Ok(effect)
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Text currently on screen
    pub fn displayed(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Width to reserve, in `ch` units, so the line never reflows
    pub fn min_width_ch(&self) -> usize {
        self.phrases
            .iter()
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Wait before the next [`tick`](Self::tick)
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => self.config.typing_speed,
            TypingPhase::Pausing => self.config.pause_duration,
            TypingPhase::Deleting => self.config.deleting_speed,
        }
    }

    /// Perform one step of the loop
    pub fn tick(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                self.shown += 1;
                if self.shown >= self.phrase_len() {
                    self.phase = TypingPhase::Pausing;
                }
            }
            TypingPhase::Pausing => {
                if self.shown == 0 {
                    self.next_phrase();
                } else {
                    self.phase = TypingPhase::Deleting;
                }
            }
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.next_phrase();
                }
            }
        }
    }

    /// Run the loop forward by `elapsed`, returning the number of steps taken.
    ///
    /// Each step consumes at least one millisecond, and one call takes at most
    /// [`MAX_STEPS_PER_ADVANCE`] steps; any remainder carries to the next call.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.pending = self.pending.saturating_add(elapsed);
        let mut steps = 0;
        while steps < MAX_STEPS_PER_ADVANCE {
            let step = self.delay().max(Duration::from_millis(1));
            if self.pending < step {
                break;
            }
            self.pending -= step;
            self.tick();
            steps += 1;
        }
        steps
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    fn next_phrase(&mut self) {
        let next = (self.index + 1) % self.phrases.len();
        tracing::trace!(phrase = next, "Typing next phrase");
        self.enter_phrase(next);
    }

    fn enter_phrase(&mut self, index: usize) {
        self.index = index;
        self.shown = 0;
        // An empty phrase has nothing to type; hold it for the pause instead
        self.phase = if self.phrase_len() == 0 {
            TypingPhase::Pausing
        } else {
            TypingPhase::Typing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            TypingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_phrase_list_rejected() {
        let result = TypingEffect::new(vec![], TypingConfig::default());
        assert_eq!(result.unwrap_err(), TypingError::NoPhrases);
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let config = TypingConfig::default();
        let mut fx = effect(&["AB", "C"]);
        assert_eq!(fx.displayed(), "");
        assert_eq!(fx.phase(), TypingPhase::Typing);

        fx.advance(config.typing_speed * 2);
        assert_eq!(fx.displayed(), "AB");
        assert_eq!(fx.phase(), TypingPhase::Pausing);

        fx.advance(config.pause_duration + config.deleting_speed * 2);
        assert_eq!(fx.displayed(), "");
        assert_eq!(fx.current_phrase(), "C");
        assert_eq!(fx.phase(), TypingPhase::Typing);
    }

    #[test]
    fn cycle_wraps_to_first_phrase() {
        let mut fx = effect(&["AB", "C"]);
        // "AB": 2 typed + pause + 2 deleted
        let first = ms(200) + ms(2000) + ms(100);
        // "C": 1 typed + pause + 1 deleted
        let second = ms(100) + ms(2000) + ms(50);
        fx.advance(first + second);
        assert_eq!(fx.phrase_index(), 0);
        assert_eq!(fx.displayed(), "");

        fx.advance(first + second);
        assert_eq!(fx.phrase_index(), 0);
        assert_eq!(fx.phase(), TypingPhase::Typing);
    }

    #[test]
    fn partial_progress_carries_over() {
        let mut fx = effect(&["Hello"]);
        assert_eq!(fx.advance(ms(150)), 1);
        assert_eq!(fx.displayed(), "H");
        assert_eq!(fx.advance(ms(50)), 1);
        assert_eq!(fx.displayed(), "He");
    }

    #[test]
    fn multibyte_phrases_step_by_char() {
        let mut fx = effect(&["héé"]);
        fx.tick();
        fx.tick();
        assert_eq!(fx.displayed(), "hé");
        assert_eq!(fx.min_width_ch(), 3);
    }

    #[test]
    fn min_width_tracks_longest_phrase() {
        let fx = effect(&["Backend Engineer", "Full-Stack Engineer", "Dev"]);
        assert_eq!(fx.min_width_ch(), "Full-Stack Engineer".len());
    }

    #[test]
    fn empty_phrase_is_paused_then_skipped() {
        let mut fx = effect(&["", "A"]);
        assert_eq!(fx.phase(), TypingPhase::Pausing);
        fx.tick();
        assert_eq!(fx.current_phrase(), "A");
        assert_eq!(fx.phase(), TypingPhase::Typing);
    }

    #[test]
    fn huge_elapsed_saturates_and_caps_steps() {
        let mut fx = effect(&["AB", "C"]);
        fx.advance(ms(50));
        assert_eq!(fx.advance(Duration::MAX), MAX_STEPS_PER_ADVANCE);
        assert_eq!(fx.advance(Duration::MAX), MAX_STEPS_PER_ADVANCE);
        assert!(fx.displayed().len() <= fx.current_phrase().len());
    }

    #[test]
    fn check_phrases_matches_constructor() {
        assert_eq!(check_phrases(&[]), Err(TypingError::NoPhrases));
        assert_eq!(check_phrases(&["A".to_string()]), Ok(()));
    }
}
