//! Terminal error route for failed client initialization.

use leptos::prelude::*;

use crate::state::session::SessionState;

const FALLBACK_MESSAGE: &str = "Something went wrong while connecting to the API.";

/// Error page rendering the failure message left in session state.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let message = move || {
        session
            .get()
            .last_error
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned())
    };

    view! {
        <div class="error-page">
            <div class="error-card">
                <h1>"Connection failed"</h1>
                <p class="error-card__message">{message}</p>
                <a class="btn btn--primary" href="/">
                    "Back to settings"
                </a>
            </div>
        </div>
    }
}
