//! Private REST transport for Jellyfin server communication
//!
//! This crate provides a minimal blocking HTTP client specifically
//! designed for talking to a Jellyfin media server: base-URL handling,
//! token authentication, query-string marshaling, and JSON, text, and
//! binary response handling with one uniform error type.

mod config;
mod error;
mod query;

pub use config::ClientConfig;
pub use error::RestError;
pub use query::{encode_segment, Query};

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Accept header for JSON endpoints
const ACCEPT_JSON: &str = "application/json";

/// Accept header for the DLNA XML document endpoints
pub const ACCEPT_XML: &str = "application/xml";

/// A blocking REST client for Jellyfin server communication
///
/// Wraps a shared connection agent plus the immutable [`ClientConfig`].
/// Cloning is cheap and clones share the underlying connection pool, so
/// one client can be handed to every API facade.
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl RestClient {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout_read(config.read_timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    /// The configured server base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET a JSON endpoint and deserialize the response body
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, RestError> {
        let response = self.send("GET", path, query, ACCEPT_JSON, None)?;
        Self::decode_json(response)
    }

    /// POST to a JSON endpoint, optionally with a JSON body, and
    /// deserialize the response body
    pub fn post_json<T, B>(&self, path: &str, query: &Query, body: Option<&B>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = Self::encode_body(body)?;
        let response = self.send("POST", path, query, ACCEPT_JSON, body)?;
        Self::decode_json(response)
    }

    /// POST to a void endpoint, optionally with a JSON body, and discard
    /// the response body
    pub fn post_empty<B>(&self, path: &str, query: &Query, body: Option<&B>) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::encode_body(body)?;
        let response = self.send("POST", path, query, ACCEPT_JSON, body)?;
        Self::drain(response)
    }

    /// DELETE a resource and discard the response body
    pub fn delete_empty(&self, path: &str, query: &Query) -> Result<(), RestError> {
        let response = self.send("DELETE", path, query, ACCEPT_JSON, None)?;
        Self::drain(response)
    }

    /// GET a text document (XML descriptions) with an explicit Accept header
    pub fn get_text(&self, path: &str, query: &Query, accept: &str) -> Result<String, RestError> {
        let response = self.send("GET", path, query, accept, None)?;
        response
            .into_string()
            .map_err(|e| RestError::Network(e.to_string()))
    }

    /// POST to an endpoint that answers with a text document
    pub fn post_text(&self, path: &str, query: &Query, accept: &str) -> Result<String, RestError> {
        let response = self.send("POST", path, query, accept, None)?;
        response
            .into_string()
            .map_err(|e| RestError::Network(e.to_string()))
    }

    /// GET a binary body (icons and other downloads)
    pub fn get_bytes(&self, path: &str, query: &Query, accept: &str) -> Result<Vec<u8>, RestError> {
        let response = self.send("GET", path, query, accept, None)?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| RestError::Network(e.to_string()))?;
        Ok(bytes)
    }

    /// Send one request and map any failure to [`RestError`]
    ///
    /// Every request carries the configured default headers and, when an
    /// access token is set, the `X-Emby-Token` header.
    fn send(
        &self,
        method: &str,
        path: &str,
        query: &Query,
        accept: &str,
        json_body: Option<Vec<u8>>,
    ) -> Result<ureq::Response, RestError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(method, path, "sending request");

        let mut request = self.agent.request(method, &url).set("Accept", accept);
        for (name, value) in &self.config.extra_headers {
            request = request.set(name, value);
        }
        if let Some(token) = self.config.access_token.as_deref() {
            request = request.set("X-Emby-Token", token);
        }
        for (name, value) in query.iter() {
            request = request.query(name, value);
        }

        let result = match json_body {
            Some(bytes) => request
                .set("Content-Type", "application/json")
                .send_bytes(&bytes),
            None => request.call(),
        };

        match result {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => {
                warn!(method, path, status, "server returned error status");
                Err(Self::status_error(status, response))
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(RestError::Network(transport.to_string()))
            }
        }
    }

    fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Vec<u8>>, RestError> {
        body.map(|b| serde_json::to_vec(b).map_err(|e| RestError::Decode(e.to_string())))
            .transpose()
    }

    fn decode_json<T: DeserializeOwned>(response: ureq::Response) -> Result<T, RestError> {
        let text = response
            .into_string()
            .map_err(|e| RestError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| RestError::Decode(e.to_string()))
    }

    /// Read and discard the body so the connection can be reused
    fn drain(response: ureq::Response) -> Result<(), RestError> {
        response
            .into_string()
            .map(|_| ())
            .map_err(|e| RestError::Network(e.to_string()))
    }

    fn status_error(status: u16, response: ureq::Response) -> RestError {
        let headers = response
            .headers_names()
            .into_iter()
            .filter_map(|name| {
                response
                    .header(&name)
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect();
        let body = response.into_string().unwrap_or_default();
        RestError::Http {
            status,
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Greeting {
        message: String,
    }

    fn client_for(server: &mockito::Server) -> RestClient {
        RestClient::new(ClientConfig::new(server.url()))
    }

    #[test]
    fn test_get_json_decodes_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/Greeting")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"hello"}"#)
            .create();

        let client = client_for(&server);
        let greeting: Greeting = client.get_json("/Greeting", &Query::new()).unwrap();

        mock.assert();
        assert_eq!(greeting.message, "hello");
    }

    #[test]
    fn test_query_pairs_are_sent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/Items")
            .match_query(mockito::Matcher::UrlEncoded(
                "limit".into(),
                "5".into(),
            ))
            .with_status(200)
            .with_body("{\"message\":\"ok\"}")
            .create();

        let client = client_for(&server);
        let _: Greeting = client
            .get_json("/Items", &Query::new().pair("limit", 5))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_access_token_header_is_sent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/Secure")
            .match_header("X-Emby-Token", "token-123")
            .with_status(200)
            .with_body("{\"message\":\"ok\"}")
            .create();

        let client = RestClient::new(
            ClientConfig::new(server.url()).access_token("token-123"),
        );
        let _: Greeting = client.get_json("/Secure", &Query::new()).unwrap();

        mock.assert();
    }

    #[test]
    fn test_error_status_carries_status_headers_and_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/Missing")
            .with_status(404)
            .with_header("x-request-id", "abc")
            .with_body("no such thing")
            .create();

        let client = client_for(&server);
        let error = client
            .get_json::<Greeting>("/Missing", &Query::new())
            .unwrap_err();

        match error {
            RestError::Http {
                status,
                headers,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such thing");
                assert!(headers
                    .iter()
                    .any(|(n, v)| n.eq_ignore_ascii_case("x-request-id") && v == "abc"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_post_empty_sends_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/Echo")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::JsonString(
                r#"{"Name":"group"}"#.to_string(),
            ))
            .with_status(204)
            .create();

        let client = client_for(&server);
        #[derive(Serialize)]
        struct Body {
            #[serde(rename = "Name")]
            name: String,
        }
        client
            .post_empty(
                "/Echo",
                &Query::new(),
                Some(&Body {
                    name: "group".to_string(),
                }),
            )
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_delete_empty_discards_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("DELETE", "/Devices")
            .match_query(mockito::Matcher::UrlEncoded("id".into(), "dev-1".into()))
            .with_status(204)
            .create();

        let client = client_for(&server);
        client
            .delete_empty("/Devices", &Query::new().pair("id", "dev-1"))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_decode_error_on_malformed_json() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/Broken")
            .with_status(200)
            .with_body("not json")
            .create();

        let client = client_for(&server);
        let error = client
            .get_json::<Greeting>("/Broken", &Query::new())
            .unwrap_err();
        assert!(matches!(error, RestError::Decode(_)));
    }

    #[test]
    fn test_get_bytes_returns_raw_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/Dlna/icons/logo.png")
            .with_status(200)
            .with_body(&[0x89u8, 0x50, 0x4e, 0x47][..])
            .create();

        let client = client_for(&server);
        let bytes = client
            .get_bytes("/Dlna/icons/logo.png", &Query::new(), "image/png")
            .unwrap();
        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }
}
