//! Scrollable conversation view: bubbles, the uploaded photo, and the
//! typing indicator shown while a run is active.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};
use crate::state::session::SessionState;
use crate::util::clock;

/// Message list that keeps itself scrolled to the newest entry.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the view to the bottom whenever the log grows.
    Effect::new(move || {
        let _count = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat__messages" node_ref=messages_ref>
            {move || {
                chat.get()
                    .messages
                    .iter()
                    .map(message_bubble)
                    .collect::<Vec<_>>()
            }}
            {move || {
                session.get().uploaded_image.map(|src| {
                    view! {
                        <div class="chat__row chat__row--user">
                            <img class="chat__image" src=src alt="Hochgeladene Kletterroute"/>
                        </div>
                    }
                })
            }}
            {move || session.get().analyzing.then(typing_indicator)}
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> impl IntoView + use<> {
    let is_user = message.is_user;
    let text = message.text.clone();
    let time = clock::format_hm(message.timestamp_ms);

    view! {
        <div class="chat__row" class:chat__row--user=is_user>
            <div class="chat__bubble" class:chat__bubble--user=is_user>
                <p class="chat__text">{text}</p>
                <p class="chat__time">{time}</p>
            </div>
        </div>
    }
}

fn typing_indicator() -> impl IntoView {
    view! {
        <div class="chat__row">
            <div class="chat__bubble chat__bubble--typing">
                <span class="chat__dot"></span>
                <span class="chat__dot"></span>
                <span class="chat__dot"></span>
                <span class="chat__typing-label">"Analysiere..."</span>
            </div>
        </div>
    }
}
