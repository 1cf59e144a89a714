use std::net::SocketAddr;

use futures::future::join_all;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use runtime_mock::error::ServerError;
use runtime_mock::runtime::NEXT_INVOCATION_PATH;
use runtime_mock::server::MockRuntimeServer;

use crate::helpers::{EXPECTED_BODY, assert_runtime_headers, spawn_server, stable_headers, url};

// ── Over a real socket ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_next_invocation_over_tcp() {
    let handle = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(url(&handle, NEXT_INVOCATION_PATH))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let headers = resp.headers().clone();
    let body = resp.bytes().await.unwrap();
    assert_runtime_headers(&headers, &body);
    assert_eq!(&body[..], EXPECTED_BODY);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn should_ignore_post_body_over_tcp() {
    let handle = spawn_server().await;
    let client = reqwest::Client::new();

    let baseline = client
        .get(url(&handle, NEXT_INVOCATION_PATH))
        .send()
        .await
        .unwrap();
    let baseline_headers = stable_headers(baseline.headers());
    let baseline_body = baseline.bytes().await.unwrap();

    let resp = client
        .post(url(&handle, "/anything"))
        .body("arbitrary \u{1F980} bytes")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(stable_headers(resp.headers()), baseline_headers);
    assert_eq!(resp.bytes().await.unwrap(), baseline_body);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn should_write_status_line_and_exact_content_length() {
    let handle = spawn_server().await;

    let mut stream = TcpStream::connect(handle.local_addr()).await.unwrap();
    stream
        .write_all(
            b"GET /2018-06-01/runtime/invocation/next HTTP/1.1\r\n\
              Host: localhost\r\n\
              Connection: close\r\n\r\n",
        )
        .await
        .unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"), "{raw}");
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    assert_eq!(body.as_bytes(), EXPECTED_BODY);
    assert!(
        head.to_ascii_lowercase().contains("\r\ncontent-length: 18\r\n"),
        "{head}"
    );

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn should_serve_concurrent_requests_identically() {
    let handle = spawn_server().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        let target = url(&handle, &format!("/concurrent/{i}"));
        async move {
            let resp = client.get(target).send().await.unwrap();
            (resp.status(), resp.bytes().await.unwrap())
        }
    });

    for (status, body) in join_all(requests).await {
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(&body[..], EXPECTED_BODY);
    }

    handle.shutdown().await.unwrap();
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_bind_error_when_port_is_taken() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let result = MockRuntimeServer::bind(addr).await;

    match result {
        Err(ServerError::Bind { addr: reported, .. }) => assert_eq!(reported, addr),
        Err(other) => panic!("expected Bind, got {other:?}"),
        Ok(_) => panic!("expected Bind, got a bound server"),
    }
}

#[tokio::test]
async fn should_resolve_ephemeral_port() {
    let server = MockRuntimeServer::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();

    assert_ne!(server.local_addr().port(), 0);
}

#[tokio::test]
async fn should_release_port_after_shutdown() {
    let handle = spawn_server().await;
    let addr = handle.local_addr();

    handle.shutdown().await.unwrap();

    assert!(TcpStream::connect(addr).await.is_err());
}
