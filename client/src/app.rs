//! Root application component with routing, metadata, and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::util::clock;

/// Root application component.
///
/// Provides the message log and session state contexts, sets the static page
/// metadata, and routes to the single chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::seeded(clock::now_ms()));
    let session = RwSignal::new(SessionState::default());

    provide_context(chat);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Oscar's Boulder Guide - KI-gestützte Kletterrouten-Analyse"/>
        <Meta
            name="description"
            content="Professionelle KI-Analyse deiner Boulderrouten. Lade einfach ein Foto hoch und erhalte sofort Expertentipps zur optimalen Lösung. Entwickelt von Oscar für die Klettergemeinschaft."
        />
        <Meta property="og:title" content="Oscar's Boulder Guide - KI Boulder Analyse"/>
        <Meta
            property="og:description"
            content="Revolutionäre KI-Technologie für die Analyse von Boulderrouten. Einfach Foto hochladen und Expertentipps erhalten."
        />
        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content="de_DE"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content="Oscar's Boulder Guide"/>
        <Meta
            name="twitter:description"
            content="KI-gestützte Boulderrouten-Analyse - Lade dein Foto hoch!"
        />

        <Router>
            <Routes fallback=|| "Seite nicht gefunden.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
