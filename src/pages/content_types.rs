//! Content-types list at `entries/by-content-type`.

use leptos::prelude::*;

use contentful::types::ContentType;

use crate::components::nav_bar::NavBar;
use crate::guard::{use_credential_guard, GuardStatus};
use crate::state::session::{ClientState, SessionState};

/// Gated landing route: all content types of the connected space.
#[component]
pub fn ContentTypesPage() -> impl IntoView {
    let status = use_credential_guard();
    view! {
        <Show
            when=move || status.get() == GuardStatus::Ready
            fallback=|| view! { <p class="page-status">"Connecting..."</p> }
        >
            <ContentTypesView/>
        </Show>
    }
}

#[component]
fn ContentTypesView() -> impl IntoView {
    let clients = expect_context::<RwSignal<ClientState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let types = RwSignal::new(None::<Vec<ContentType>>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(client) = clients.get().client else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match client.content_types().await {
                Ok(page) => types.set(Some(page.items)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = client;
    });

    let query = move || session.get().credentials.as_query();

    view! {
        <div class="list-page">
            <NavBar/>
            <h2>"Content Types"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || types.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p class="page-status">"Loading content types..."</p>
                        </Show>
                    }
                }
            >
                <ul class="card-list">
                    {move || {
                        types
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|ct| {
                                let href = format!(
                                    "/entries/by-content-type/{}?{}",
                                    urlencoding::encode(&ct.sys.id),
                                    query(),
                                );
                                let field_count = ct.fields.len();
                                let description = ct.description.unwrap_or_default();
                                view! {
                                    <li class="card-list__item">
                                        <a class="card" href=href>
                                            <span class="card__title">{ct.name}</span>
                                            <span class="card__meta">
                                                {format!("{field_count} fields")}
                                            </span>
                                            <span class="card__description">{description}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
