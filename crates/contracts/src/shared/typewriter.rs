//! Cycling text state machine.
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves to
//! the next phrase (wrapping). The caller owns the clock: [`Typewriter::tick`]
//! advances one step and returns how long to wait before the next one.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub deleting: Duration,
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    /// Visible prefix length in chars, not bytes
    visible: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            index: 0,
            visible: 0,
            phase: TypewriterPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn visible_len(&self) -> usize {
        self.visible
    }

    pub fn visible_text(&self) -> String {
        self.current_phrase().chars().take(self.visible).collect()
    }

    /// Delay before the first tick
    pub fn initial_delay(&self) -> Duration {
        self.timing.typing
    }

    /// Advances one step and returns the delay until the next step.
    pub fn tick(&mut self) -> Duration {
        let full = self.current_phrase().chars().count();
        match self.phase {
            TypewriterPhase::Typing => {
                if self.visible < full {
                    self.visible += 1;
                }
                if self.visible >= full {
                    self.phase = TypewriterPhase::Holding;
                    self.timing.hold
                } else {
                    self.timing.typing
                }
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
                self.timing.deleting
            }
            TypewriterPhase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypewriterPhase::Typing;
                    self.timing.typing
                } else {
                    self.timing.deleting
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = Typewriter::new(Vec::new(), TypewriterTiming::default());
        assert_eq!(result.unwrap_err(), TypewriterError::NoPhrases);
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(words(&["abc", "de"]), timing).unwrap();

        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.visible_text(), "a");
        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.tick(), timing.hold);
        assert_eq!(tw.visible_text(), "abc");
        assert_eq!(tw.phase(), TypewriterPhase::Holding);

        assert_eq!(tw.tick(), timing.deleting);
        assert_eq!(tw.visible_text(), "abc");
        assert_eq!(tw.tick(), timing.deleting);
        assert_eq!(tw.visible_text(), "ab");
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible_len(), 0);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn test_visible_length_bounds_and_monotonicity() {
        let mut tw = Typewriter::new(
            words(&["Feel the night.", "Relax. Unwind.", "x"]),
            TypewriterTiming::default(),
        )
        .unwrap();

        for _ in 0..2_000 {
            let before_phase = tw.phase();
            let before_index = tw.phrase_index();
            let before_len = tw.visible_len();
            tw.tick();

            assert!(tw.visible_len() <= tw.current_phrase().chars().count());
            if tw.phrase_index() == before_index {
                match before_phase {
                    TypewriterPhase::Typing => assert!(tw.visible_len() >= before_len),
                    TypewriterPhase::Deleting => assert!(tw.visible_len() <= before_len),
                    TypewriterPhase::Holding => assert_eq!(tw.visible_len(), before_len),
                }
            }
        }
    }

    #[test]
    fn test_single_phrase_keeps_cycling() {
        let mut tw = Typewriter::new(words(&["ok"]), TypewriterTiming::default()).unwrap();
        let mut full_reveals = 0;
        for _ in 0..40 {
            tw.tick();
            if tw.phase() == TypewriterPhase::Holding {
                full_reveals += 1;
            }
            assert_eq!(tw.phrase_index(), 0);
        }
        assert!(full_reveals >= 2);
    }

    #[test]
    fn test_multibyte_phrases_are_counted_in_chars() {
        let mut tw = Typewriter::new(words(&["7pm – 1am"]), TypewriterTiming::default()).unwrap();
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.visible_text(), "7pm –");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(words(&["a", "b"]), TypewriterTiming::default()).unwrap();
        // type, hold, delete for each one-char phrase
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 1);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
    }
}
