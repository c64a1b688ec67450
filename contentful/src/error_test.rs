use super::*;

#[test]
fn from_response_parses_sys_id_and_message() {
    let body = r#"{
        "sys": { "type": "Error", "id": "AccessTokenInvalid" },
        "message": "The access token you sent could not be found or is invalid.",
        "requestId": "abc123"
    }"#;
    let err = ClientError::from_response(401, body);
    assert_eq!(
        err,
        ClientError::Api {
            id: Some("AccessTokenInvalid".to_owned()),
            status: 401,
            message: "The access token you sent could not be found or is invalid.".to_owned(),
        }
    );
    assert!(err.is_invalid_token());
}

#[test]
fn from_response_without_sys_id_is_not_invalid_token() {
    let body = r#"{ "sys": { "type": "Error" }, "message": "The resource could not be found." }"#;
    let err = ClientError::from_response(404, body);
    assert!(!err.is_invalid_token());
    assert_eq!(err.to_string(), "The resource could not be found.");
}

#[test]
fn from_response_falls_back_on_malformed_body() {
    let err = ClientError::from_response(502, "<html>bad gateway</html>");
    assert_eq!(
        err,
        ClientError::Api {
            id: None,
            status: 502,
            message: "the API responded with status 502".to_owned(),
        }
    );
}

#[test]
fn from_response_fills_missing_message() {
    let body = r#"{ "sys": { "id": "RateLimitExceeded" } }"#;
    let err = ClientError::from_response(429, body);
    assert_eq!(err.to_string(), "the API responded with status 429");
    assert!(matches!(err, ClientError::Api { id: Some(ref id), .. } if id == "RateLimitExceeded"));
}

#[test]
fn transport_and_decode_errors_are_never_invalid_token() {
    assert!(!ClientError::Transport("offline".to_owned()).is_invalid_token());
    assert!(!ClientError::Decode("bad json".to_owned()).is_invalid_token());
}

#[test]
fn display_formats_each_variant() {
    assert_eq!(
        ClientError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ClientError::Decode("missing field `sys`".to_owned()).to_string(),
        "failed to decode response: missing field `sys`"
    );
}
