use crate::RemoteError;

#[test]
fn given_api_error_then_service_message_is_body_message() {
    let err = RemoteError::api_error(409, "23505", "duplicate key");
    assert_eq!(err.service_message(), "duplicate key");
    assert!(err.to_string().contains("23505"));
}

#[test]
fn given_status_codes_then_only_server_side_failures_are_transient() {
    assert!(RemoteError::api_error(503, "PGRST503", "down").is_transient());
    assert!(RemoteError::api_error(429, "429", "slow down").is_transient());
    assert!(!RemoteError::api_error(400, "PGRST100", "bad filter").is_transient());
    assert!(!RemoteError::config("missing key").is_transient());
}
