//! Photo intake controls: a camera-capture picker and a plain file picker.
//!
//! Both controls front the same contract — accept any image file, decode it
//! locally, and (if no run is active) start the analysis sequence. The camera
//! button is only shown on narrow form factors via CSS; the inputs stay
//! hidden and are triggered from the buttons.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[cfg(feature = "csr")]
use crate::analysis::{script, sequencer};
#[cfg(feature = "csr")]
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::util::{clock, image_intake};

/// Intake control region at the bottom of the page.
#[component]
pub fn UploadBar() -> impl IntoView {
    #[cfg(feature = "csr")]
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let camera_input = NodeRef::<leptos::html::Input>::new();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let analyzing = move || session.get().analyzing;
    let button_label = move |idle: &'static str| {
        move || if analyzing() { "Analysiere..." } else { idle }
    };

    let on_camera_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = camera_input.get() {
                submit_selection(chat, session, &input);
            }
        }
    };
    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                submit_selection(chat, session, &input);
            }
        }
    };

    let open_camera = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = camera_input.get() {
                input.click();
            }
        }
    };
    let open_picker = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    view! {
        <div class="upload-bar">
            <input
                node_ref=camera_input
                class="upload-bar__input"
                type="file"
                accept="image/*"
                capture="environment"
                on:change=on_camera_change
            />
            <input
                node_ref=file_input
                class="upload-bar__input"
                type="file"
                accept="image/*"
                on:change=on_file_change
            />

            <div class="upload-bar__buttons">
                <button
                    class="btn btn--camera"
                    on:click=open_camera
                    disabled=analyzing
                >
                    {button_label("Foto aufnehmen")}
                </button>
                <button
                    class="btn btn--upload"
                    on:click=open_picker
                    disabled=analyzing
                >
                    {button_label("Foto hochladen")}
                </button>
            </div>

            <p class="upload-bar__hint">
                "Lade ein Foto deiner Kletterroute hoch für eine Expertenanalyse"
            </p>
        </div>
    }
}

/// Decode the first selected file and, if accepted, append the fixed user
/// caption and start the sequencer. Rejected submissions (a run is already
/// active) and decode failures change nothing.
#[cfg(feature = "csr")]
fn submit_selection(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    input: &web_sys::HtmlInputElement,
) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    // Reset so picking the same file again still fires `change`.
    input.set_value("");

    if session.get_untracked().analyzing {
        return;
    }

    image_intake::read_image_file(&file, move |data_url| {
        let mut accepted = false;
        session.update(|s| accepted = s.begin(data_url));
        if !accepted {
            return;
        }
        chat.update(|log| log.push(script::USER_CAPTION, true, clock::now_ms()));
        sequencer::spawn_analysis(chat, session);
    });
}
