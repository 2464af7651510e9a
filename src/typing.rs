//! Typewriter animation sequencer.
//!
//! Drives the "I'm a ..." line on the Home section: each word from a fixed
//! list is typed out a character at a time, held for a beat, deleted twice
//! as fast, and then the next word starts, wrapping around forever.
//!
//! The sequencer is a pure state machine. It owns no timers: `tick()`
//! advances the state by one step and reports how long to wait before the
//! next step. The hold after a finished word is folded into that single
//! timer chain (the returned delay is simply longer), so at most one timer
//! is ever pending and a tick can never race the hold.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::timer::{Scheduler, TimerId};

/// Delay between ticks while typing.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);

/// Delay between ticks while deleting. Deletion runs twice as fast.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

/// How long a fully typed word stays on screen before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

// ============================================================================
// SEQUENCER
// ============================================================================

/// Constructing a sequencer with no words is a configuration error:
/// there is no well-defined animation without at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyWordList;

impl fmt::Display for EmptyWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typing sequencer requires at least one word")
    }
}

impl Error for EmptyWordList {}

/// The typewriter state machine.
///
/// Invariant: `text` is always a prefix of the current word. The word
/// index only changes while `text` is empty, so the invariant holds
/// trivially across word boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSequencer {
    words: Vec<String>,
    word_index: usize,
    text: String,
    deleting: bool,
    /// Set when the current word is fully typed and the on-screen hold
    /// is pending; the next tick flips to deleting without touching text.
    holding: bool,
}

impl TypingSequencer {
    /// Create a sequencer at the initial state: first word, empty text.
    pub fn new(words: Vec<String>) -> Result<Self, EmptyWordList> {
        if words.is_empty() {
            return Err(EmptyWordList);
        }
        Ok(TypingSequencer {
            words,
            word_index: 0,
            text: String::new(),
            deleting: false,
            holding: false,
        })
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the word the animation is currently on.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// True while characters are being removed.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// The word currently being typed or deleted.
    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    /// Advance the animation by one step and return the delay before the
    /// next step. Total: every state has a defined successor.
    pub fn tick(&mut self) -> Duration {
        // Hold elapsed: switch to the deleting phase, text untouched.
        if self.holding {
            self.holding = false;
            self.deleting = true;
            return DELETE_DELAY;
        }

        if !self.deleting {
            let word = &self.words[self.word_index];
            if self.text.len() == word.len() {
                // Word complete: keep it on screen for the hold.
                self.holding = true;
                HOLD_DELAY
            } else {
                // Type the next character of the current word.
                let next = word[self.text.len()..].chars().next();
                if let Some(c) = next {
                    self.text.push(c);
                }
                TYPE_DELAY
            }
        } else if self.text.is_empty() {
            // Deleted down to nothing: move on to the next word, wrapping.
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            TYPE_DELAY
        } else {
            self.text.pop();
            DELETE_DELAY
        }
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// Owns a sequencer plus its single pending timer.
///
/// The driver is the seam between the pure sequencer and a [`Scheduler`]:
/// it arms the next tick after every step and remembers the pending id so
/// teardown can cancel it. After `shutdown`, no timer event will advance
/// the sequencer again.
#[derive(Debug)]
pub struct TypingDriver {
    sequencer: TypingSequencer,
    pending: Option<TimerId>,
}

impl TypingDriver {
    pub fn new(sequencer: TypingSequencer) -> Self {
        TypingDriver { sequencer, pending: None }
    }

    /// The sequencer state, for rendering and assertions.
    pub fn sequencer(&self) -> &TypingSequencer {
        &self.sequencer
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        self.sequencer.text()
    }

    /// Arm the first tick. Restarting cancels any prior pending timer,
    /// so there is never more than one timer alive.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(prev) = self.pending.take() {
            scheduler.cancel(prev);
        }
        self.pending = Some(scheduler.schedule_after(TYPE_DELAY));
    }

    /// React to a fired timer. Returns true if the id belonged to this
    /// driver (the event is consumed and the next tick is armed).
    pub fn on_timer(&mut self, id: TimerId, scheduler: &mut dyn Scheduler) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        let delay = self.sequencer.tick();
        self.pending = Some(scheduler.schedule_after(delay));
        true
    }

    /// Cancel the pending timer. The sequencer can no longer advance.
    pub fn shutdown(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
