//! Classification of the endpoint forms accepted on the command line

use prober::endpoint::{Authority, classify, scheme};
use prober::{ProbeError, Protocol};

#[test]
fn test_accepted_forms() {
    let cases = [
        ("http://example.com", Protocol::Http),
        ("http://example.com:8080/health", Protocol::Http),
        ("https://example.com/a/b?c=d", Protocol::Https),
        ("https://[::1]:8443", Protocol::Https),
        ("tcp://10.0.0.1:22", Protocol::Tcp),
    ];

    for (raw, expected) in cases {
        assert_eq!(classify(raw).unwrap(), expected, "{raw}");
    }
}

#[test]
fn test_tcp_target_components() {
    let authority = Authority::parse("tcp://cache.internal:6379").unwrap();

    assert_eq!(authority.protocol, "tcp");
    assert_eq!(authority.host, "cache.internal");
    assert_eq!(authority.port, 6379);
}

#[test]
fn test_blank_line_target_fails_classification() {
    assert!(matches!(classify(""), Err(ProbeError::Parse(_))));
}

#[test]
fn test_unknown_protocol_keeps_its_tag() {
    assert_eq!(scheme("gopher://example.com").unwrap(), "gopher");
    assert_eq!(
        classify("gopher://example.com"),
        Err(ProbeError::UnsupportedProtocol("gopher".into()))
    );
}

#[test]
fn test_protocol_display_matches_tag() {
    for protocol in [Protocol::Http, Protocol::Https, Protocol::Tcp] {
        assert_eq!(Protocol::from_tag(&protocol.to_string()).unwrap(), protocol);
    }
}
