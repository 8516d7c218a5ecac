//! Timed playback of the analysis script.
//!
//! One local task walks the playback plan start to finish, awaiting each
//! entry's delay before appending it to the log. Sequential awaits in a
//! single task guarantee strict ordering; there are never two timers whose
//! relative order could race. There is no cancellation: a started run always
//! reaches the punchline, and `SessionState::begin` prevents a second run
//! from starting while one is active.

use leptos::prelude::RwSignal;

use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Start one analysis run. Appends every planned message in order, then
/// clears the analyzing flag.
#[cfg(feature = "csr")]
pub fn spawn_analysis(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    leptos::task::spawn_local(run_to_completion(chat, session));
}

/// Native builds have no timer source; the sequencer only runs in the browser.
#[cfg(not(feature = "csr"))]
pub fn spawn_analysis(_chat: RwSignal<ChatState>, _session: RwSignal<SessionState>) {}

#[cfg(feature = "csr")]
async fn run_to_completion(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    use leptos::prelude::Update;

    use crate::analysis::script;
    use crate::util::clock;

    for entry in script::playback_plan(js_sys::Math::random) {
        gloo_timers::future::sleep(std::time::Duration::from_millis(entry.delay_ms)).await;
        chat.update(|log| log.push(entry.text, false, clock::now_ms()));
    }

    session.update(SessionState::finish);
}
