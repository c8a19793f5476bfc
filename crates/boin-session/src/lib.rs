//! Vowel-only input session.
//!
//! `VowelSession` owns the state of one answer: the vowels typed so far, the
//! candidates shown for them, and how the user got there (key presses,
//! deletions, elapsed time). State changes go through [`transition`].

mod transition;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Instant;

use boin_core::settings::settings;
use boin_core::{Candidate, Vowel, VowelDictionary};
use tracing::debug;

pub use transition::transition;
pub use types::{
    Abandonment, Composition, Selection, SessionEvent, SessionOutcome, SessionState,
};

pub struct VowelSession {
    dict: Arc<VowelDictionary>,
    max_results: usize,
    state: SessionState,
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl VowelSession {
    /// New idle session capped at `candidates.max_results` from settings.
    pub fn new(dict: Arc<VowelDictionary>) -> Self {
        Self::with_max_results(dict, settings().candidates.max_results)
    }

    pub fn with_max_results(dict: Arc<VowelDictionary>, max_results: usize) -> Self {
        Self {
            dict,
            max_results,
            state: SessionState::Idle,
            started: None,
            finished: None,
        }
    }

    pub fn handle(&mut self, event: SessionEvent) -> &SessionState {
        let was_idle = matches!(self.state, SessionState::Idle);
        let was_finished = self.state.is_finished();
        let prev = std::mem::take(&mut self.state);
        self.state = transition(prev, event, &self.dict, self.max_results);

        match &self.state {
            SessionState::Idle => {
                self.started = None;
                self.finished = None;
            }
            SessionState::Composing(_) if was_idle => {
                self.started = Some(Instant::now());
                self.finished = None;
            }
            s if s.is_finished() && !was_finished => {
                self.finished = Some(Instant::now());
                debug!(selected = matches!(s, SessionState::Selected(_)), "session finished");
            }
            _ => {}
        }
        &self.state
    }

    /// Shorthand for `handle(SessionEvent::Start)`.
    pub fn start(&mut self) -> &SessionState {
        self.handle(SessionEvent::Start)
    }

    pub fn type_vowel(&mut self, v: Vowel) -> &SessionState {
        self.handle(SessionEvent::Type(v))
    }

    pub fn backspace(&mut self) -> &SessionState {
        self.handle(SessionEvent::Backspace)
    }

    pub fn describe(&mut self, text: impl Into<String>) -> &SessionState {
        self.handle(SessionEvent::FreeText(text.into()))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    /// Vowels typed so far; empty when Idle.
    pub fn input(&self) -> &str {
        match &self.state {
            SessionState::Idle => "",
            SessionState::Composing(c) => &c.input,
            SessionState::Abandoned(a) => &a.composition.input,
            SessionState::Selected(s) => &s.input,
        }
    }

    /// Candidates currently on screen; empty unless composing.
    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            SessionState::Composing(c) => &c.candidates,
            _ => &[],
        }
    }

    /// Summary once the session is Selected or Abandoned.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        let elapsed_secs = match (self.started, self.finished) {
            (Some(s), Some(f)) => (f.duration_since(s).as_secs_f64() * 100.0).round() / 100.0,
            _ => 0.0,
        };
        match &self.state {
            SessionState::Selected(s) => Some(SessionOutcome {
                selected: Some(s.candidate.native.clone()),
                romaji: Some(s.candidate.romaji.clone()),
                free_text: None,
                input: s.input.clone(),
                steps: s.steps,
                deletes: s.deletes,
                elapsed_secs,
            }),
            SessionState::Abandoned(a) => Some(SessionOutcome {
                selected: None,
                romaji: None,
                free_text: a.free_text.clone(),
                input: a.composition.input.clone(),
                steps: a.composition.steps,
                deletes: a.composition.deletes,
                elapsed_secs,
            }),
            _ => None,
        }
    }
}
