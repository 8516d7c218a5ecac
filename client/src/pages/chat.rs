//! The chat page — the application's single screen.

use leptos::prelude::*;

use crate::components::header::PageHeader;
use crate::components::message_list::MessageList;
use crate::components::upload_bar::UploadBar;

/// Full-page chat layout: header, conversation, intake controls.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader/>
            <main class="page__chat">
                <MessageList/>
                <UploadBar/>
            </main>
        </div>
    }
}
