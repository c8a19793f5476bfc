use boin_core::{Candidate, Vowel};
use serde::Serialize;

/// Keystroke-level events accepted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Begin a fresh composition.
    Start,
    /// Append one vowel.
    Type(Vowel),
    /// Remove the last vowel.
    Backspace,
    /// Choose the shown candidate at this index.
    Pick(usize),
    /// The wanted word is not among the candidates.
    GiveUp,
    /// Describe the wanted word after giving up. Blank text is ignored.
    FreeText(String),
    /// Drop everything and return to Idle.
    Reset,
}

/// Input being composed plus the candidates currently shown for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    pub input: String,
    pub candidates: Vec<Candidate>,
    /// Vowel keys pressed.
    pub steps: u32,
    /// Backspaces that removed something.
    pub deletes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub candidate: Candidate,
    pub input: String,
    pub steps: u32,
    pub deletes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Composing(Composition),
    Selected(Selection),
    /// Gave up; keeps the composition as it was.
    Abandoned(Abandonment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abandonment {
    pub composition: Composition,
    /// What the user wanted instead, once described. Never blank.
    pub free_text: Option<String>,
}

impl SessionState {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Selected(_) | Self::Abandoned(_))
    }

    /// Abandoned and still waiting for a free-text description.
    pub fn awaits_free_text(&self) -> bool {
        matches!(self, Self::Abandoned(a) if a.free_text.is_none())
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    /// Native text of the chosen candidate, `None` if the user gave up.
    pub selected: Option<String>,
    pub romaji: Option<String>,
    /// Description typed after giving up.
    pub free_text: Option<String>,
    pub input: String,
    pub steps: u32,
    pub deletes: u32,
    /// Seconds from `Start` to the finishing event, rounded to 0.01.
    pub elapsed_secs: f64,
}
