//! HTTP checker tests

use std::sync::Arc;

use prober::{Checker, ProbeError, Prober, Protocol, TcpChecker};

use crate::support::{FixedStatus, TIMEOUT, closed_port, local_http_checker, spawn_http_responder};

#[tokio::test]
async fn test_stubbed_transport_status_is_reported() {
    let prober = Prober::with_checkers(Arc::new(FixedStatus(404)), Arc::new(TcpChecker::new(TIMEOUT)));

    let result = prober.probe("http://example.com").await;

    assert_eq!(result.target, "http://example.com");
    assert_eq!(result.protocol, Some(Protocol::Http));
    assert_eq!(result.status, 404);
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_not_found_from_server() {
    let addr = spawn_http_responder("404 Not Found").await;

    let status = local_http_checker().check(&format!("http://{addr}/missing")).await;
    assert_eq!(status, Ok(404));
}

#[tokio::test]
async fn test_ok_from_server() {
    let addr = spawn_http_responder("200 OK").await;

    let status = local_http_checker().check(&format!("http://{addr}/")).await;
    assert_eq!(status, Ok(200));
}

#[tokio::test]
async fn test_server_error_is_not_a_probe_error() {
    let addr = spawn_http_responder("503 Service Unavailable").await;
    let prober = crate::support::local_prober();

    let result = prober.probe(&format!("http://{addr}/")).await;
    assert_eq!(result.status, 503);
    assert!(result.error.is_none());
    assert!(result.is_up());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let addr = closed_port().await;
    let prober = crate::support::local_prober();

    let result = prober.probe(&format!("http://{addr}/")).await;
    assert_eq!(result.protocol, Some(Protocol::Http));
    assert_eq!(result.status, 0);
    assert!(matches!(result.error, Some(ProbeError::Network(_))), "{:?}", result.error);
}
