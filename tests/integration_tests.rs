//! Integration tests for client construction and configuration.

use std::time::Duration;

use twilio_api::clients::{encode_vars, HttpRequest};
use twilio_api::{
    AccountSid, AuthToken, ClientConfig, ConfigError, Endpoint, HttpMethod, ParamSet, RestClient,
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_READ_TIMEOUT,
};

#[test]
fn test_construction_succeeds_for_non_empty_values() {
    let triples = [
        ("AC1", "t", "https://api.twilio.com"),
        ("ACabc", "token with spaces", "http://localhost:8080"),
        ("x", "y", "z"),
    ];

    for (sid, token, endpoint) in triples {
        let client = RestClient::with_endpoint(sid, token, endpoint).unwrap();
        assert_eq!(client.account_sid(), sid);
        assert_eq!(client.auth_token(), token);
        assert_eq!(client.endpoint(), endpoint);
    }
}

#[test]
fn test_construction_fails_for_any_empty_value() {
    let cases = [
        (("", "t", "e"), ConfigError::EmptyAccountSid),
        (("s", "", "e"), ConfigError::EmptyAuthToken),
        (("s", "t", ""), ConfigError::EmptyEndpoint),
    ];

    for ((sid, token, endpoint), expected) in cases {
        let error = RestClient::with_endpoint(sid, token, endpoint).unwrap_err();
        assert_eq!(error, expected);
    }
}

#[test]
fn test_default_client_uses_default_settings() {
    let client = RestClient::new("AC123", "token").unwrap();

    assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(client.config().connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
    assert_eq!(client.config().read_timeout(), DEFAULT_READ_TIMEOUT);
    assert_eq!(DEFAULT_CONNECT_TIMEOUT, Duration::from_millis(10_000));
    assert_eq!(DEFAULT_READ_TIMEOUT, Duration::from_millis(300_000));
}

#[test]
fn test_config_can_be_loaded_from_json() {
    #[derive(serde::Deserialize)]
    struct Credentials {
        account_sid: AccountSid,
        auth_token: AuthToken,
        endpoint: Endpoint,
    }

    let credentials: Credentials = serde_json::from_str(
        r#"{"account_sid": "AC123", "auth_token": "token", "endpoint": "http://localhost:1234"}"#,
    )
    .unwrap();

    let config = ClientConfig::builder()
        .account_sid(credentials.account_sid)
        .auth_token(credentials.auth_token)
        .endpoint(credentials.endpoint)
        .build()
        .unwrap();
    let client = RestClient::from_config(config).unwrap();

    assert_eq!(client.endpoint(), "http://localhost:1234");
}

#[test]
fn test_empty_credentials_are_rejected_when_loading_json() {
    let result = serde_json::from_str::<AuthToken>(r#""""#);
    assert!(result.is_err());
}

#[test]
fn test_prepared_request_matches_encoded_params() {
    let mut params = ParamSet::new();
    params.insert("a".to_string(), "1 2".to_string());
    params.insert("b".to_string(), "x".to_string());

    let request = HttpRequest::prepare(DEFAULT_ENDPOINT, "/Foo", HttpMethod::Post, Some(&params))
        .unwrap();

    assert_eq!(request.url(), "https://api.twilio.com/Foo");
    assert_eq!(request.body(), Some(encode_vars(Some(&params)).as_str()));
    assert_eq!(request.target().path(), "/Foo");
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
    assert_send_sync::<ClientConfig>();
}
