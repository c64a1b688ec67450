//! Asset detail view with file metadata.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use contentful::types::Asset;
use contentful::urls;

use crate::components::nav_bar::NavBar;
use crate::guard::{use_credential_guard, GuardStatus};
use crate::state::session::{ClientState, SessionState};

/// Human-readable file size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Gated route showing one asset and its backing file.
#[component]
pub fn AssetPage() -> impl IntoView {
    let status = use_credential_guard();
    view! {
        <Show
            when=move || status.get() == GuardStatus::Ready
            fallback=|| view! { <p class="page-status">"Connecting..."</p> }
        >
            <AssetView/>
        </Show>
    }
}

#[component]
fn AssetView() -> impl IntoView {
    let clients = expect_context::<RwSignal<ClientState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let asset = RwSignal::new(None::<Asset>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(asset_id) = params.get().get("asset_id") else {
            return;
        };
        let Some(client) = clients.get().client else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match client.asset(&asset_id).await {
                Ok(a) => asset.set(Some(a)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (client, asset_id);
    });

    let back_href = move || format!("/assets?{}", session.get().credentials.as_query());
    let title = move || {
        asset
            .get()
            .map_or_else(
                || "Asset".to_owned(),
                |a| a.fields.title.unwrap_or(a.sys.id),
            )
    };

    view! {
        <div class="detail-page">
            <NavBar/>
            <a class="detail-page__back" href=back_href>
                "< Back to assets"
            </a>
            <h2>{title}</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || asset.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p class="page-status">"Loading asset..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    asset
                        .get()
                        .map(|a| {
                            let description = a.fields.description.clone().unwrap_or_default();
                            let file = a.fields.file.clone();
                            view! {
                                <div class="asset-detail">
                                    <p class="asset-detail__description">{description}</p>
                                    {file
                                        .map(|f| {
                                            let src = urls::file_url(&f.url);
                                            let is_image = f.is_image();
                                            let name = f.file_name.clone().unwrap_or_default();
                                            let mime = f.content_type.clone().unwrap_or_default();
                                            let size = f
                                                .details
                                                .as_ref()
                                                .and_then(|d| d.size)
                                                .map(format_size)
                                                .unwrap_or_default();
                                            let dimensions = f
                                                .details
                                                .as_ref()
                                                .and_then(|d| d.image)
                                                .map(|i| format!("{}x{}", i.width, i.height))
                                                .unwrap_or_default();
                                            view! {
                                                <div class="asset-detail__file">
                                                    {is_image
                                                        .then(|| {
                                                            view! {
                                                                <img
                                                                    class="asset-detail__image"
                                                                    src=src.clone()
                                                                    alt=name.clone()
                                                                />
                                                            }
                                                        })}
                                                    <dl class="asset-detail__meta">
                                                        <dt>"File"</dt>
                                                        <dd>
                                                            <a href=src.clone() target="_blank" rel="noopener">
                                                                {name}
                                                            </a>
                                                        </dd>
                                                        <dt>"Type"</dt>
                                                        <dd>{mime}</dd>
                                                        <dt>"Size"</dt>
                                                        <dd>{size}</dd>
                                                        <dt>"Dimensions"</dt>
                                                        <dd>{dimensions}</dd>
                                                    </dl>
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
