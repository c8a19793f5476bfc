use std::sync::Arc;

use boin_core::settings::settings;
use boin_session::{SessionEvent, VowelSession};

use super::die;
use super::query_ops::load;
use crate::keys::{kana_label, parse_keys};
use crate::render::render_candidates;

/// Feed a keystroke script through a session, then optionally pick a
/// candidate or, after a give-up, describe the wanted word.
pub fn replay(
    dict_file: &str,
    keys: &str,
    pick: Option<usize>,
    free_text: Option<&str>,
    n: Option<usize>,
    json: bool,
) {
    let dict = Arc::new(load(dict_file, settings().dictionary.on_duplicate));
    let events = die!(parse_keys(keys), "Error: {}");
    let max_results = n.unwrap_or(settings().candidates.max_results);

    let mut session = VowelSession::with_max_results(dict, max_results);
    session.start();
    for event in events {
        session.handle(event);
    }
    if let Some(idx) = pick {
        session.handle(SessionEvent::Pick(idx));
        if session.is_composing() {
            eprintln!("Error: no candidate #{idx} for {:?}", session.input());
            std::process::exit(1);
        }
    }
    if let Some(text) = free_text {
        if !session.state().awaits_free_text() {
            eprintln!("Error: --free-text needs a script that gives up with '!'");
            std::process::exit(1);
        }
        session.describe(text);
        if session.state().awaits_free_text() {
            eprintln!("Error: free text must not be blank");
            std::process::exit(1);
        }
    }

    match (session.outcome(), json) {
        (Some(outcome), true) => {
            println!("{}", die!(serde_json::to_string_pretty(&outcome), "Error: {}"));
        }
        (Some(outcome), false) => {
            match &outcome.selected {
                Some(native) => println!("selected: {native}"),
                None => println!("selected: (none)"),
            }
            if let Some(text) = &outcome.free_text {
                println!("free text: {text}");
            }
            println!(
                "input: {} ({})  steps: {}  deletes: {}  elapsed: {:.2}s",
                outcome.input,
                kana_label(&outcome.input),
                outcome.steps,
                outcome.deletes,
                outcome.elapsed_secs
            );
        }
        (None, true) => {
            let cands = session.candidates();
            println!("{}", die!(serde_json::to_string_pretty(cands), "Error: {}"));
        }
        (None, false) => {
            println!("input: {} ({})", session.input(), kana_label(session.input()));
            print!("{}", render_candidates(session.candidates()));
        }
    }
}
