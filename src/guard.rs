//! The credential gate guarding every content route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected page installs [`use_credential_guard`], which re-evaluates
//! on every query change: it derives candidate credentials from the URL,
//! compares them with the session, and either lets the page render, kicks
//! off client initialization first, or redirects. The decision itself is a
//! pure function ([`evaluate`]) so the whole table is unit-testable without
//! a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::params::ParamsMap;
use leptos_router::NavigateOptions;

use contentful::ClientError;

#[cfg(feature = "csr")]
use crate::net::client::ContentfulClient;
use crate::state::session::{ClientState, Credentials, SessionState};
use crate::util::preview::is_preview_set;

/// Suffix appended to invalid-token failures to disambiguate Preview vs
/// Delivery token misuse.
pub const INVALID_TOKEN_HINT: &str = "If you are using a Preview API token \
     make sure you check the Preview API box. Otherwise, make sure you are \
     using a Delivery API token and the box is unchecked.";

/// Raw credential-bearing query parameters of a navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialQuery {
    pub access_token: Option<String>,
    pub space_id: Option<String>,
    pub preview: Option<String>,
}

impl CredentialQuery {
    /// Extract the credential parameters from a router query map.
    #[must_use]
    pub fn from_params(params: &ParamsMap) -> Self {
        Self {
            access_token: params.get("access_token"),
            space_id: params.get("space_id"),
            preview: params.get("preview"),
        }
    }

    /// Candidate credentials this navigation carries.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            access_token: self.access_token.clone().unwrap_or_default(),
            space: self.space_id.clone().unwrap_or_default(),
            preview: is_preview_set(self.preview.as_deref()),
        }
    }

    /// Whether the navigation carries neither credential parameter.
    ///
    /// Empty-string values count as absent, matching the original falsiness
    /// check this gate replaces.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.access_token.as_deref().unwrap_or_default().is_empty()
            && self.space_id.as_deref().unwrap_or_default().is_empty()
    }

    /// Rebuild the raw credential query string, preserving whatever subset
    /// this navigation carried. Used by the `entries` redirect so partial
    /// credentials still reach the gate of the target route.
    #[must_use]
    pub fn as_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(token) = &self.access_token {
            parts.push(format!("access_token={}", urlencoding::encode(token)));
        }
        if let Some(space) = &self.space_id {
            parts.push(format!("space_id={}", urlencoding::encode(space)));
        }
        if let Some(preview) = &self.preview {
            parts.push(format!("preview={}", urlencoding::encode(preview)));
        }
        parts.join("&")
    }
}

/// Outcome of evaluating one navigation against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the page directly.
    Proceed,
    /// No credentials at all: send the user to the settings page.
    RedirectHome,
    /// Complete, changed (or first) credentials: connect before rendering.
    Initialize(Credentials),
}

/// What the installing page should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    /// Initialization pending; show a connecting placeholder.
    Checking,
    /// The navigation may render (a redirect may already be queued).
    Ready,
}

/// The guard decision table.
///
/// Initialization is requested when the query carries a complete credential
/// pair and either no client exists yet or the pair addresses a different
/// client than the stored one. A bare query redirects home. Anything else
/// (partial or unchanged credentials) proceeds untouched.
#[must_use]
pub fn evaluate(query: &CredentialQuery, stored: &Credentials, has_client: bool) -> GuardDecision {
    let candidate = query.credentials();
    if candidate.is_complete() && (!has_client || !stored.same_client(&candidate)) {
        GuardDecision::Initialize(candidate)
    } else if query.is_bare() {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Proceed
    }
}

/// User-facing message for a failed initialization, with the
/// preview-vs-delivery hint appended for rejected tokens.
#[must_use]
pub fn failure_message(err: &ClientError) -> String {
    let mut message = err.to_string();
    if err.is_invalid_token() {
        if !message.is_empty() && !message.ends_with(' ') {
            message.push(' ');
        }
        message.push_str(INVALID_TOKEN_HINT);
    }
    message
}

/// Whether a completed initialization attempt has been superseded by a newer
/// navigation and must be discarded.
#[cfg(any(test, feature = "csr"))]
fn superseded(session_epoch: u64, captured_epoch: u64) -> bool {
    session_epoch != captured_epoch
}

/// Install the credential gate for the current route.
///
/// Returns a status signal the page gates its rendering on; the hook handles
/// navigation (home or `/error`) and session/client mutation itself.
pub fn use_credential_guard() -> ReadSignal<GuardStatus> {
    let session = expect_context::<RwSignal<SessionState>>();
    let clients = expect_context::<RwSignal<ClientState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let (status, set_status) = signal(GuardStatus::Checking);

    Effect::new(move || {
        let request = CredentialQuery::from_params(&query.get());
        let stored = session.with_untracked(|s| s.credentials.clone());
        let has_client = clients.with_untracked(|c| c.client.is_some());
        match evaluate(&request, &stored, has_client) {
            GuardDecision::Proceed => set_status.set(GuardStatus::Ready),
            GuardDecision::RedirectHome => {
                // Queue the replacement before reporting ready.
                navigate("/", NavigateOptions { replace: true, ..Default::default() });
                set_status.set(GuardStatus::Ready);
            }
            GuardDecision::Initialize(candidate) => {
                set_status.set(GuardStatus::Checking);
                let epoch = session.with_untracked(|s| s.epoch) + 1;
                session.update(|s| s.epoch = epoch);
                initialize(candidate, epoch, session, clients, set_status, navigate.clone());
            }
        }
    });

    status
}

/// Connect with the candidate credentials, then resume the held navigation.
///
/// On success the client handle and the stored credentials are written
/// before the page is released. On failure the session keeps its previous
/// credentials, the message lands in session state, and the user is sent to
/// the error route. Completions superseded by a newer attempt are dropped.
fn initialize(
    candidate: Credentials,
    epoch: u64,
    session: RwSignal<SessionState>,
    clients: RwSignal<ClientState>,
    set_status: WriteSignal<GuardStatus>,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = ContentfulClient::connect(&candidate).await;
        if superseded(session.with_untracked(|s| s.epoch), epoch) {
            return;
        }
        match result {
            Ok(client) => {
                clients.update(|c| c.client = Some(client));
                session.update(|s| s.credentials = candidate);
                set_status.set(GuardStatus::Ready);
            }
            Err(err) => {
                let message = failure_message(&err);
                leptos::logging::warn!("client initialization failed: {message}");
                session.update(|s| s.last_error = Some(message));
                navigate("/error", NavigateOptions::default());
                set_status.set(GuardStatus::Ready);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (candidate, epoch, session, clients, set_status, navigate);
    }
}
