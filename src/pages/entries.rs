//! Entries list for one content type.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use contentful::types::{Collection, ContentType, Entry};

use crate::components::nav_bar::NavBar;
use crate::guard::{use_credential_guard, GuardStatus};
use crate::state::session::{ClientState, SessionState};

/// Gated route listing the entries of `:content_type_id`.
#[component]
pub fn EntriesPage() -> impl IntoView {
    let status = use_credential_guard();
    view! {
        <Show
            when=move || status.get() == GuardStatus::Ready
            fallback=|| view! { <p class="page-status">"Connecting..."</p> }
        >
            <EntriesView/>
        </Show>
    }
}

#[component]
fn EntriesView() -> impl IntoView {
    let clients = expect_context::<RwSignal<ClientState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let content_type = RwSignal::new(None::<ContentType>);
    let entries = RwSignal::new(None::<Collection<Entry>>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(ct_id) = params.get().get("content_type_id") else {
            return;
        };
        let Some(client) = clients.get().client else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match client.content_type(&ct_id).await {
                Ok(ct) => content_type.set(Some(ct)),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            }
            match client.entries(&ct_id, 0).await {
                Ok(page) => entries.set(Some(page)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (client, ct_id);
    });

    let query = move || session.get().credentials.as_query();
    let heading = move || {
        content_type
            .get()
            .map_or_else(|| "Entries".to_owned(), |ct| ct.name)
    };
    let count_line = move || {
        entries.get().map(|page| {
            let shown = page.items.len();
            format!("{shown} of {} entries", page.total)
        })
    };

    view! {
        <div class="list-page">
            <NavBar/>
            <h2>{heading}</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || count_line().is_some()>
                <p class="page-status">{move || count_line().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || entries.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p class="page-status">"Loading entries..."</p>
                        </Show>
                    }
                }
            >
                <ul class="card-list">
                    {move || {
                        let display_field = content_type
                            .get()
                            .and_then(|ct| ct.display_field);
                        let ct_query = query();
                        entries
                            .get()
                            .map(|page| page.items)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|entry| {
                                let title = entry.title(display_field.as_deref());
                                let updated = entry.sys.updated_at.clone().unwrap_or_default();
                                let href = format!(
                                    "/entries/by-content-type/{}/{}?{}",
                                    urlencoding::encode(
                                        &params.get().get("content_type_id").unwrap_or_default()
                                    ),
                                    urlencoding::encode(&entry.sys.id),
                                    ct_query,
                                );
                                view! {
                                    <li class="card-list__item">
                                        <a class="card" href=href>
                                            <span class="card__title">{title}</span>
                                            <span class="card__meta">{updated}</span>
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
