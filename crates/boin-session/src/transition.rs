use boin_core::{query, VowelDictionary};
use tracing::trace;

use crate::types::{Abandonment, Composition, Selection, SessionEvent, SessionState};

/// Compute the next state. Events that do not apply to the current state
/// leave it unchanged.
pub fn transition(
    state: SessionState,
    event: SessionEvent,
    dict: &VowelDictionary,
    max_results: usize,
) -> SessionState {
    trace!(?event, "transition");
    match (state, event) {
        (_, SessionEvent::Reset) => SessionState::Idle,
        (SessionState::Idle, SessionEvent::Start) => SessionState::Composing(Composition::default()),
        (SessionState::Composing(mut c), SessionEvent::Type(v)) => {
            c.input.push(v.as_char());
            c.steps += 1;
            refresh(&mut c, dict, max_results);
            SessionState::Composing(c)
        }
        (SessionState::Composing(mut c), SessionEvent::Backspace) => {
            if c.input.pop().is_some() {
                c.deletes += 1;
                refresh(&mut c, dict, max_results);
            }
            SessionState::Composing(c)
        }
        (SessionState::Composing(c), SessionEvent::Pick(idx)) => match c.candidates.get(idx) {
            Some(candidate) => SessionState::Selected(Selection {
                candidate: candidate.clone(),
                input: c.input,
                steps: c.steps,
                deletes: c.deletes,
            }),
            None => SessionState::Composing(c),
        },
        (SessionState::Composing(composition), SessionEvent::GiveUp) => {
            SessionState::Abandoned(Abandonment {
                composition,
                free_text: None,
            })
        }
        (SessionState::Abandoned(mut a), SessionEvent::FreeText(text))
            if a.free_text.is_none() && !text.trim().is_empty() =>
        {
            a.free_text = Some(text.trim().to_owned());
            SessionState::Abandoned(a)
        }
        (state, _) => state,
    }
}

fn refresh(c: &mut Composition, dict: &VowelDictionary, max_results: usize) {
    c.candidates = query(dict, &c.input, max_results);
}
