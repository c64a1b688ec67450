//! Settings page: the credential entry form at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only ungated content route; the guard redirects here whenever
//! a navigation carries no credentials. Submitting the form navigates to the
//! content-types list with the credentials in the query string, which is
//! where the gate performs the actual client initialization.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::state::session::{Credentials, SessionState};
use crate::util::persistence::{self, SettingsDraft};

/// Target of the browse action for a credential triple.
#[must_use]
fn browse_href(credentials: &Credentials) -> String {
    format!("/entries/by-content-type?{}", credentials.as_query())
}

/// Credential form with space id, access token, and preview toggle.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let stored = session.with_untracked(|s| s.credentials.clone());
    let draft = persistence::load_draft().unwrap_or_default();

    // Prefer the live session over the persisted draft for prefills.
    let space = RwSignal::new(if stored.space.is_empty() { draft.space } else { stored.space });
    let token = RwSignal::new(stored.access_token);
    let preview = RwSignal::new(if token.get_untracked().is_empty() { draft.preview } else { stored.preview });

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            access_token: token.get().trim().to_owned(),
            space: space.get().trim().to_owned(),
            preview: preview.get(),
        };
        if !credentials.is_complete() {
            return;
        }
        persistence::save_draft(&SettingsDraft {
            space: credentials.space.clone(),
            preview: credentials.preview,
        });
        navigate(&browse_href(&credentials), NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <div class="settings-card">
                <h1>"Contentful Discovery"</h1>
                <p class="settings-card__subtitle">
                    "Browse the content types, entries and assets of a space."
                </p>
                <form class="settings-form" on:submit=on_submit>
                    <label class="settings-form__label">
                        "Space ID"
                        <input
                            class="settings-form__input"
                            type="text"
                            placeholder="cfexampleapi"
                            prop:value=move || space.get()
                            on:input=move |ev| space.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Access Token"
                        <input
                            class="settings-form__input"
                            type="password"
                            placeholder="Delivery or Preview API token"
                            prop:value=move || token.get()
                            on:input=move |ev| token.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || preview.get()
                            on:change=move |ev| preview.set(event_target_checked(&ev))
                        />
                        "Preview API (include drafts)"
                    </label>
                    <button
                        class="btn btn--primary settings-form__submit"
                        type="submit"
                        disabled=move || space.get().trim().is_empty() || token.get().trim().is_empty()
                    >
                        "Browse space"
                    </button>
                </form>
            </div>
        </div>
    }
}
