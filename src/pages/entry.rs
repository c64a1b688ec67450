//! Entry detail view rendering every field generically.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use contentful::types::{ContentType, Entry};

use crate::components::field_value::FieldValue;
use crate::components::nav_bar::NavBar;
use crate::guard::{use_credential_guard, GuardStatus};
use crate::state::session::{ClientState, SessionState};

/// Gated route showing `:entry_id` of `:content_type_id`.
#[component]
pub fn EntryPage() -> impl IntoView {
    let status = use_credential_guard();
    view! {
        <Show
            when=move || status.get() == GuardStatus::Ready
            fallback=|| view! { <p class="page-status">"Connecting..."</p> }
        >
            <EntryView/>
        </Show>
    }
}

#[component]
fn EntryView() -> impl IntoView {
    let clients = expect_context::<RwSignal<ClientState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let content_type = RwSignal::new(None::<ContentType>);
    let entry = RwSignal::new(None::<Entry>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let map = params.get();
        let (Some(ct_id), Some(entry_id)) = (map.get("content_type_id"), map.get("entry_id"))
        else {
            return;
        };
        let Some(client) = clients.get().client else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // The content type is only needed for titles and field kinds;
            // its failure should not hide the entry itself.
            if let Ok(ct) = client.content_type(&ct_id).await {
                content_type.set(Some(ct));
            }
            match client.entry(&entry_id).await {
                Ok(e) => entry.set(Some(e)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (client, ct_id, entry_id);
    });

    let back_href = move || {
        format!(
            "/entries/by-content-type/{}?{}",
            urlencoding::encode(&params.get().get("content_type_id").unwrap_or_default()),
            session.get().credentials.as_query(),
        )
    };
    let title = move || {
        let display_field = content_type.get().and_then(|ct| ct.display_field);
        entry
            .get()
            .map_or_else(|| "Entry".to_owned(), |e| e.title(display_field.as_deref()))
    };

    view! {
        <div class="detail-page">
            <NavBar/>
            <a class="detail-page__back" href=back_href>
                "< Back to entries"
            </a>
            <h2>{title}</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || entry.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p class="page-status">"Loading entry..."</p>
                        </Show>
                    }
                }
            >
                <div class="field-list">
                    {move || {
                        let ct = content_type.get();
                        entry
                            .get()
                            .map(|e| e.fields)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(field_id, value)| {
                                let kind = ct
                                    .as_ref()
                                    .and_then(|ct| ct.field_kind(&field_id))
                                    .map(ToOwned::to_owned);
                                view! {
                                    <FieldValue name=field_id kind=kind value=value/>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
