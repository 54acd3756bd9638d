//! Tests for the remote timestamp fetcher

mod common;

use common::atom_feed;
use psl_sync::feed::fetch_last_updated;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn well_formed_feed_returns_timestamp_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits/master.atom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(atom_feed("2020-06-01T00:00:00Z")))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/commits/master.atom", server.uri());

    let result = fetch_last_updated(&client, &url).await;
    assert_eq!(result.as_deref(), Some("2020-06-01T00:00:00Z"));
}

#[tokio::test]
async fn http_404_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits/master.atom"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/commits/master.atom", server.uri());

    assert_eq!(fetch_last_updated(&client, &url).await, None);
}

#[tokio::test]
async fn http_500_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits/master.atom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/commits/master.atom", server.uri());

    assert_eq!(fetch_last_updated(&client, &url).await, None);
}

#[tokio::test]
async fn connection_error_returns_none() {
    // Take a port from a mock server, then drop it so connections are refused.
    let server = MockServer::start().await;
    let url = format!("{}/commits/master.atom", server.uri());
    drop(server);

    let client = reqwest::Client::new();
    assert_eq!(fetch_last_updated(&client, &url).await, None);
}

#[tokio::test]
async fn invalid_url_returns_none() {
    let client = reqwest::Client::new();
    assert_eq!(fetch_last_updated(&client, "not a url").await, None);
}

#[tokio::test]
async fn feed_without_updated_tag_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits/master.atom"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<feed><entry><title>no timestamps</title></entry></feed>"),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/commits/master.atom", server.uri());

    assert_eq!(fetch_last_updated(&client, &url).await, None);
}
