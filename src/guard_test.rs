use super::*;

fn query(token: Option<&str>, space: Option<&str>, preview: Option<&str>) -> CredentialQuery {
    CredentialQuery {
        access_token: token.map(ToOwned::to_owned),
        space_id: space.map(ToOwned::to_owned),
        preview: preview.map(ToOwned::to_owned),
    }
}

fn stored(token: &str, space: &str) -> Credentials {
    Credentials {
        access_token: token.to_owned(),
        space: space.to_owned(),
        preview: false,
    }
}

#[test]
fn bare_query_redirects_home() {
    let decision = evaluate(&query(None, None, None), &Credentials::default(), false);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

#[test]
fn empty_string_parameters_count_as_bare() {
    let decision = evaluate(&query(Some(""), Some(""), None), &stored("abc", "xyz"), true);
    assert_eq!(decision, GuardDecision::RedirectHome);
}

#[test]
fn complete_credentials_with_empty_store_initialize() {
    let decision = evaluate(
        &query(Some("abc"), Some("xyz"), None),
        &Credentials::default(),
        false,
    );
    assert_eq!(
        decision,
        GuardDecision::Initialize(Credentials {
            access_token: "abc".to_owned(),
            space: "xyz".to_owned(),
            preview: false,
        })
    );
}

#[test]
fn initialize_carries_preview_flag_from_query() {
    let decision = evaluate(
        &query(Some("abc"), Some("xyz"), Some("true")),
        &Credentials::default(),
        false,
    );
    let GuardDecision::Initialize(candidate) = decision else {
        panic!("expected initialize, got {decision:?}");
    };
    assert!(candidate.preview);
}

#[test]
fn unchanged_credentials_proceed_without_initialization() {
    let decision = evaluate(&query(Some("abc"), Some("xyz"), None), &stored("abc", "xyz"), true);
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn changed_token_reinitializes() {
    let decision = evaluate(&query(Some("new"), Some("xyz"), None), &stored("abc", "xyz"), true);
    assert!(matches!(decision, GuardDecision::Initialize(_)));
}

#[test]
fn changed_space_reinitializes() {
    let decision = evaluate(&query(Some("abc"), Some("new"), None), &stored("abc", "xyz"), true);
    assert!(matches!(decision, GuardDecision::Initialize(_)));
}

#[test]
fn matching_credentials_without_client_still_initialize() {
    // Store equality alone is not enough; the client handle must exist.
    let decision = evaluate(&query(Some("abc"), Some("xyz"), None), &stored("abc", "xyz"), false);
    assert!(matches!(decision, GuardDecision::Initialize(_)));
}

#[test]
fn partial_credentials_proceed_untouched() {
    let with_token_only = evaluate(&query(Some("abc"), None, None), &Credentials::default(), false);
    assert_eq!(with_token_only, GuardDecision::Proceed);

    let with_space_only = evaluate(&query(None, Some("xyz"), None), &Credentials::default(), false);
    assert_eq!(with_space_only, GuardDecision::Proceed);
}

#[test]
fn preview_only_change_does_not_reinitialize() {
    // Preview is excluded from the equality rule.
    let decision = evaluate(
        &query(Some("abc"), Some("xyz"), Some("true")),
        &stored("abc", "xyz"),
        true,
    );
    assert_eq!(decision, GuardDecision::Proceed);
}

#[test]
fn failure_message_appends_hint_for_invalid_token() {
    let err = ClientError::Api {
        id: Some("AccessTokenInvalid".to_owned()),
        status: 401,
        message: "The access token you sent could not be found or is invalid.".to_owned(),
    };
    let message = failure_message(&err);
    assert!(message.starts_with("The access token you sent"));
    assert!(message.ends_with(INVALID_TOKEN_HINT));
}

#[test]
fn failure_message_passes_other_errors_through() {
    let err = ClientError::Api {
        id: Some("NotFound".to_owned()),
        status: 404,
        message: "The resource could not be found.".to_owned(),
    };
    assert_eq!(failure_message(&err), "The resource could not be found.");

    let transport = ClientError::Transport("connection refused".to_owned());
    assert_eq!(failure_message(&transport), "request failed: connection refused");
}

#[test]
fn as_query_preserves_carried_subset() {
    assert_eq!(query(None, None, None).as_query(), "");
    assert_eq!(
        query(Some("abc"), None, None).as_query(),
        "access_token=abc"
    );
    assert_eq!(
        query(Some("a b"), Some("xyz"), Some("true")).as_query(),
        "access_token=a%20b&space_id=xyz&preview=true"
    );
}

#[test]
fn stale_completions_are_superseded() {
    assert!(superseded(3, 2));
    assert!(!superseded(3, 3));
}

#[test]
fn completion_from_an_older_attempt_is_discarded() {
    // Same increment-and-capture sequence the hook runs per initialization.
    let mut session = SessionState::default();

    session.epoch += 1;
    let first = session.epoch;

    // A second navigation starts its own attempt before the first lands.
    session.epoch += 1;
    let second = session.epoch;

    assert!(superseded(session.epoch, first));
    assert!(!superseded(session.epoch, second));
}
