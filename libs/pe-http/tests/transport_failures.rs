#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Connection-level failures surface as `TransportError`, never as responses.

use httpmock::prelude::*;
use pe_http::{HttpClient, HttpRequest, Transport, TransportError};
use std::net::TcpListener;
use std::time::Duration;

fn unused_local_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn connection_refused_is_connect_error() {
    let port = unused_local_port();
    let client = HttpClient::builder(format!("http://127.0.0.1:{port}"))
        .allow_insecure_http()
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client
        .execute(&HttpRequest::get("/orchestrator/v1/jobs"))
        .unwrap_err();

    assert!(matches!(err, TransportError::Connect(_)), "got {err:?}");
}

#[test]
fn slow_server_fails_without_response() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_secs(3));
    });

    let client = HttpClient::builder(server.base_url())
        .allow_insecure_http()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.execute(&HttpRequest::get("/slow")).unwrap_err();

    assert!(
        matches!(err, TransportError::Timeout(_) | TransportError::Transport(_)),
        "got {err:?}"
    );
}

#[test]
fn server_error_is_returned_as_response() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/boom");
        then.status(503).body("maintenance");
    });

    let client = HttpClient::builder(server.base_url())
        .allow_insecure_http()
        .build()
        .unwrap();

    let response = client.execute(&HttpRequest::get("/boom")).unwrap();
    assert_eq!(response.status().as_u16(), 503);
    assert_eq!(response.status_text(), "Service Unavailable");
    assert_eq!(response.text(), "maintenance");
}
