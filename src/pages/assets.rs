//! Asset grid for the connected space.

use leptos::prelude::*;

use contentful::types::{Asset, Collection};
use contentful::urls;

use crate::components::nav_bar::NavBar;
use crate::guard::{use_credential_guard, GuardStatus};
use crate::state::session::{ClientState, SessionState};

/// Gated route listing the space's assets with image previews.
#[component]
pub fn AssetsPage() -> impl IntoView {
    let status = use_credential_guard();
    view! {
        <Show
            when=move || status.get() == GuardStatus::Ready
            fallback=|| view! { <p class="page-status">"Connecting..."</p> }
        >
            <AssetsView/>
        </Show>
    }
}

#[component]
fn AssetsView() -> impl IntoView {
    let clients = expect_context::<RwSignal<ClientState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let assets = RwSignal::new(None::<Collection<Asset>>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(client) = clients.get().client else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match client.assets(0).await {
                Ok(page) => assets.set(Some(page)),
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
            <h2>"Assets"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || assets.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p class="page-status">"Loading assets..."</p>
                        </Show>
                    }
                }
            >
                <ul class="asset-grid">
                    {move || {
                        let asset_query = query();
                        assets
                            .get()
                            .map(|page| page.items)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|asset| {
                                let href = format!(
                                    "/assets/{}?{}",
                                    urlencoding::encode(&asset.sys.id),
                                    asset_query,
                                );
                                let title = asset
                                    .fields
                                    .title
                                    .clone()
                                    .unwrap_or_else(|| asset.sys.id.clone());
                                let thumbnail = asset
                                    .fields
                                    .file
                                    .as_ref()
                                    .filter(|f| f.is_image())
                                    .map(|f| urls::file_url(&f.url));
                                view! {
                                    <li class="asset-grid__item">
                                        <a class="asset-card" href=href>
                                            {thumbnail
                                                .map(|src| {
                                                    view! {
                                                        <img
                                                            class="asset-card__thumb"
                                                            src=src
                                                            alt=title.clone()
                                                        />
                                                    }
                                                })}
                                            <span class="asset-card__title">{title}</span>
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
