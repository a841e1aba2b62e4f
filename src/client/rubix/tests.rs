use super::RubixClient;
use super::lookup::parse_lookup_body;
use crate::domain::{CustomNetwork, FetchError, Network, NetworkConfig, TokenInfo, TokenType};
use crate::test_utils::{PayloadMother, StubServer};
use std::time::Duration;

/// Client for a local stub server, bypassing any system proxy.
fn client_for(url: &str) -> RubixClient {
    RubixClient {
        api_url: url.to_string(),
        client: reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
    }
}

#[test]
fn test_client_urls() {
    let client = RubixClient::from_config(&NetworkConfig::BuiltIn(Network::LocalNet)).unwrap();
    assert_eq!(client.api_url(), "http://localhost:20000");
    assert_eq!(
        client.search_url("did:rubix:abc"),
        "http://localhost:20000/search?id=did%3Arubix%3Aabc"
    );

    let custom = NetworkConfig::Custom(CustomNetwork::new("Mine", "http://node:1/"));
    let client = RubixClient::from_config(&custom).unwrap();
    assert_eq!(client.search_url("RBT-1"), "http://node:1/search?id=RBT-1");
}

#[test]
fn test_parse_lookup_body() {
    let value = parse_lookup_body(r#"{"type":"RBT","rbt_info":{"rbt_id":"A"}}"#).unwrap();
    assert_eq!(value["type"], "RBT");

    let err = parse_lookup_body("<html>oops</html>").unwrap_err();
    assert!(matches!(err, FetchError::Parse { .. }));
}

#[tokio::test]
async fn test_lookup_normalizes_response() {
    let server = StubServer::respond(
        "200 OK",
        PayloadMother::rbt("A", "did:rubix:owner", "5", 10).to_string(),
    )
    .await;

    let info = client_for(&server.url).lookup("A").await.unwrap();

    assert_eq!(info.token_type(), Some(TokenType::Rbt));
    let TokenInfo::Rbt(rbt) = info else {
        panic!("Expected RBT variant");
    };
    assert_eq!(rbt.owner_did.as_deref(), Some("did:rubix:owner"));
    assert_eq!(
        server.request_line.await.unwrap(),
        "GET /search?id=A HTTP/1.1"
    );
}

#[tokio::test]
async fn test_lookup_unplaceable_payload_is_unknown() {
    let server = StubServer::respond("200 OK", r#"{"type":"FT"}"#).await;

    let info = client_for(&server.url).lookup("FT-x").await.unwrap();

    assert_eq!(
        info,
        TokenInfo::Unknown {
            token_id: "FT-x".to_string()
        }
    );
}

#[tokio::test]
async fn test_lookup_not_found() {
    let server = StubServer::respond("404 Not Found", "{}").await;

    let err = client_for(&server.url).lookup("RBT-missing").await.unwrap_err();

    match err {
        FetchError::NotFound { id, .. } => assert_eq!(id, "RBT-missing"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_server_error() {
    let server = StubServer::respond("500 Internal Server Error", "{}").await;

    let err = client_for(&server.url).fetch_raw("x").await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_lookup_invalid_json() {
    let server = StubServer::respond("200 OK", "not json").await;

    let err = client_for(&server.url).lookup("x").await.unwrap_err();

    assert!(matches!(err, FetchError::Parse { .. }));
}
