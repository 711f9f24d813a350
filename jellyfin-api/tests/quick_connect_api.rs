//! HTTP-level tests for the quick connect facade

use jellyfin_api::model::QuickConnectState;
use jellyfin_api::{ClientConfig, QuickConnectApi, RestClient};
use mockito::Matcher;

fn api_for(server: &mockito::Server) -> QuickConnectApi {
    QuickConnectApi::new(&RestClient::new(ClientConfig::new(server.url())))
}

#[test]
fn get_status_decodes_state() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/QuickConnect/Status")
        .with_status(200)
        .with_body("\"Active\"")
        .create();

    let api = api_for(&server);
    let state = api.get_status().unwrap();

    mock.assert();
    assert_eq!(state, QuickConnectState::Active);
}

#[test]
fn initiate_returns_pairing_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/QuickConnect/Initiate")
        .with_status(200)
        .with_body(r#"{"Authenticated": false, "Secret": "s3cret", "Code": "123456"}"#)
        .create();

    let api = api_for(&server);
    let result = api.initiate().unwrap();

    mock.assert();
    assert_eq!(result.code.as_deref(), Some("123456"));
    assert!(!result.authenticated);
}

#[test]
fn connect_polls_with_secret() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/QuickConnect/Connect")
        .match_query(Matcher::UrlEncoded("secret".into(), "s3cret".into()))
        .with_status(200)
        .with_body(r#"{"Authenticated": true, "Secret": "s3cret"}"#)
        .create();

    let api = api_for(&server);
    let result = api.connect("s3cret").unwrap();

    mock.assert();
    assert!(result.authenticated);
}

#[test]
fn authorize_posts_code_and_decodes_bool() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/QuickConnect/Authorize")
        .match_query(Matcher::UrlEncoded("code".into(), "123456".into()))
        .with_status(200)
        .with_body("true")
        .create();

    let api = api_for(&server);
    assert!(api.authorize("123456").unwrap());

    mock.assert();
}

#[test]
fn deauthorize_returns_revoked_count() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/QuickConnect/Deauthorize")
        .with_status(200)
        .with_body("2")
        .create();

    let api = api_for(&server);
    assert_eq!(api.deauthorize().unwrap(), 2);

    mock.assert();
}

#[test]
fn available_sends_state_query() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/QuickConnect/Available")
        .match_query(Matcher::UrlEncoded(
            "status".into(),
            "Available".into(),
        ))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.available(QuickConnectState::Available).unwrap();

    mock.assert();
}

#[test]
fn activate_posts_without_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/QuickConnect/Activate")
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.activate().unwrap();

    mock.assert();
}
