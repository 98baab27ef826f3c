use httpmock::prelude::*;

use linto_utility::config::{LmConfig, NluConfig};
use linto_utility::populate::{inject_lm, inject_nlu};
use linto_utility::MsError;

use super::fixture_path;

// Nothing listens on port 1: any attempted request fails with a transport error.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/admin";

fn nlu_config(url: Option<&str>, token: Option<&str>) -> NluConfig {
    NluConfig {
        url: url.map(str::to_string),
        auth_token: token.map(str::to_string),
        timeout_secs: 5,
    }
}

#[test]
fn nlu_without_configuration_returns_false() {
    assert!(!inject_nlu(&nlu_config(None, None), "app", "/tmp/x").unwrap());
    assert!(!inject_nlu(&nlu_config(Some(DEAD_ENDPOINT), None), "app", "/tmp/x").unwrap());
    assert!(!inject_nlu(&nlu_config(None, Some("token")), "app", "/tmp/x").unwrap());
}

#[test]
fn lm_without_configuration_returns_false() {
    assert!(!inject_lm(&LmConfig::default(), "app", "/tmp/x").unwrap());
}

#[test]
fn nlu_uploads_with_basic_authorization() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/admin/dump/sentences")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .body_includes("name=\"data\"")
            .body_includes("filename=\"app_linto.json\"")
            .body_includes("\"applicationName\":\"app:linto\"")
            .body_includes("\"intent\":\"app:testNameIntent\"");
        then.status(200).body("{}");
    });

    let url = server.url("/rest/admin/dump/sentences");
    let config = nlu_config(Some(&url), Some("dXNlcjpwYXNz"));
    let uploaded = inject_nlu(&config, "linto", fixture_path("parser.md")).unwrap();

    assert!(uploaded);
    mock.assert();
}

#[test]
fn lm_uploads_to_configured_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/lm/data")
            .body_includes("name=\"data\"")
            .body_includes("\"applicationName\":\"app:linto\"");
        then.status(201);
    });

    let config = LmConfig {
        url: Some(server.url("/lm/data")),
        timeout_secs: 5,
    };
    assert!(inject_lm(&config, "linto", fixture_path("parser.md")).unwrap());
    mock.assert();
}

#[test]
fn server_error_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nlu");
        then.status(500).body("boom");
    });

    let url = server.url("/nlu");
    let config = nlu_config(Some(&url), Some("token"));
    let err = inject_nlu(&config, "linto", fixture_path("parser.md")).unwrap_err();

    match err {
        MsError::Transport(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("boom"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let config = LmConfig {
        url: Some(DEAD_ENDPOINT.to_string()),
        timeout_secs: 2,
    };
    let err = inject_lm(&config, "linto", fixture_path("parser.md")).unwrap_err();
    assert!(matches!(err, MsError::Transport(_)));
}

#[test]
fn missing_corpus_fails_before_any_request() {
    let config = nlu_config(Some(DEAD_ENDPOINT), Some("token"));
    let err = inject_nlu(&config, "linto", "fake/path").unwrap_err();
    assert!(matches!(err, MsError::NotFound(_)));
}
