//! Page header with the guide's title and tagline.

use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">"🧗‍♂️ Oscar's Boulder Guide"</h1>
            <p class="page-header__tagline">"Dein intelligenter Kletterbegleiter"</p>
        </header>
    }
}
