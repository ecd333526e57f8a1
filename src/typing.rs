use rand::Rng;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,   // Adding characters
    Holding,  // Phrase complete, waiting
    Deleting, // Removing characters
    Gap,      // Phrase erased, waiting before the next one
}

/// Types and erases a rotating list of phrases, one character at a time.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypingPhase,
    wait: f32,
    jitter: f32,
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            visible_chars: 0,
            phase: TypingPhase::Typing,
            wait: TYPE_DELAY,
            jitter: 0.0,
        }
    }

    /// Randomizes each keystroke delay by up to `jitter` of its length.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.clamp(0.0, 0.9);
        self
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// The currently visible part of the phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.visible_chars)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn update(&mut self, dt: f32) {
        if self.phrases.is_empty() {
            return;
        }
        self.wait -= dt;
        while self.wait <= 0.0 {
            self.step();
            self.wait += self.delay();
        }
    }

    fn step(&mut self) {
        let len = self.phrases[self.phrase_index].chars().count();
        match self.phase {
            TypingPhase::Typing => {
                if self.visible_chars < len {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= len {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => self.phase = TypingPhase::Deleting,
            TypingPhase::Deleting => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.phase = TypingPhase::Gap;
                }
            }
            TypingPhase::Gap => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = TypingPhase::Typing;
            }
        }
    }

    fn delay(&self) -> f32 {
        let base = match self.phase {
            TypingPhase::Typing => TYPE_DELAY,
            TypingPhase::Holding => TYPE_HOLD,
            TypingPhase::Deleting => DELETE_DELAY,
            TypingPhase::Gap => TYPE_GAP,
        };
        if self.jitter > 0.0 && self.phase == TypingPhase::Typing {
            base * (1.0 + rand::rng().random_range(-self.jitter..=self.jitter))
        } else {
            base
        }
    }
}
