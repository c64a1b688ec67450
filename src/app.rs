//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session and client-handle signals (no module-level state
//! anywhere) and wires the route table; every content route except `/` and
//! `/error` installs the credential gate itself.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_navigate, use_query_map},
    NavigateOptions, ParamSegment, StaticSegment,
};

use crate::guard::CredentialQuery;
use crate::pages::asset::AssetPage;
use crate::pages::assets::AssetsPage;
use crate::pages::content_types::ContentTypesPage;
use crate::pages::entries::EntriesPage;
use crate::pages::entry::EntryPage;
use crate::pages::error::ErrorPage;
use crate::pages::settings::SettingsPage;
use crate::state::session::{ClientState, SessionState};

/// Root application component.
///
/// Provides the shared session/client contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let clients = RwSignal::new(ClientState::default());
    provide_context(session);
    provide_context(clients);

    view! {
        <Title text="Contentful Discovery"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SettingsPage/>
                    <Route path=StaticSegment("entries") view=EntriesRedirect/>
                    <Route
                        path=(StaticSegment("entries"), StaticSegment("by-content-type"))
                        view=ContentTypesPage
                    />
                    <Route
                        path=(
                            StaticSegment("entries"),
                            StaticSegment("by-content-type"),
                            ParamSegment("content_type_id"),
                        )
                        view=EntriesPage
                    />
                    <Route
                        path=(
                            StaticSegment("entries"),
                            StaticSegment("by-content-type"),
                            ParamSegment("content_type_id"),
                            ParamSegment("entry_id"),
                        )
                        view=EntryPage
                    />
                    <Route path=StaticSegment("assets") view=AssetsPage/>
                    <Route
                        path=(StaticSegment("assets"), ParamSegment("asset_id"))
                        view=AssetPage
                    />
                    <Route path=StaticSegment("error") view=ErrorPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Legacy alias: `entries` forwards to `entries/by-content-type`, carrying
/// whatever credential parameters the navigation had.
#[component]
fn EntriesRedirect() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    Effect::new(move || {
        let carried = CredentialQuery::from_params(&query.get()).as_query();
        let target = if carried.is_empty() {
            "/entries/by-content-type".to_owned()
        } else {
            format!("/entries/by-content-type?{carried}")
        };
        navigate(&target, NavigateOptions { replace: true, ..Default::default() });
    });

    view! { <p class="page-status">"Redirecting..."</p> }
}
