//! Top navigation for gated content pages.
//!
//! Every link rebuilds the credential query string from the session so the
//! gate keeps passing without a fresh initialization.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Navigation bar showing the connected space and the section links.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = move || session.get().credentials.as_query();
    let space = move || session.get().credentials.space;
    let mode = move || {
        if session.get().credentials.preview {
            "Preview API"
        } else {
            "Delivery API"
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__space">
                {space}
                <span class="nav-bar__mode">{mode}</span>
            </span>
            <a class="nav-bar__link" href=move || format!("/entries/by-content-type?{}", query())>
                "Entries"
            </a>
            <a class="nav-bar__link" href=move || format!("/assets?{}", query())>
                "Assets"
            </a>
            <span class="nav-bar__spacer"></span>
            <a class="nav-bar__link" href="/">
                "Settings"
            </a>
        </nav>
    }
}
