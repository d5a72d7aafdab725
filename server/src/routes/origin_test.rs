use super::*;
use axum::http::HeaderValue;

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_static(value));
    }
    map
}

#[test]
fn pinned_origin_wins() {
    let h = headers(&[("host", "internal:3000")]);
    assert_eq!(resolve_origin(&h, Some("https://thermasim.com"), false).unwrap(), "https://thermasim.com");
}

#[test]
fn host_header_defaults_to_http() {
    let h = headers(&[("host", "example.com")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://example.com");
}

#[test]
fn host_header_keeps_port() {
    let h = headers(&[("host", "127.0.0.1:8080")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://127.0.0.1:8080");
}

#[test]
fn forwarded_proto_and_host_are_honored_when_trusted() {
    let h = headers(&[("host", "10.0.0.5:3000"), ("x-forwarded-proto", "https"), ("x-forwarded-host", "example.com")]);
    assert_eq!(resolve_origin(&h, None, true).unwrap(), "https://example.com");
}

#[test]
fn forwarded_lists_use_first_hop() {
    let h = headers(&[("host", "internal"), ("x-forwarded-proto", "HTTPS, http"), ("x-forwarded-host", "a.example, b.example")]);
    assert_eq!(resolve_origin(&h, None, true).unwrap(), "https://a.example");
}

#[test]
fn unknown_forwarded_proto_falls_back_to_http() {
    let h = headers(&[("host", "example.com"), ("x-forwarded-proto", "gopher")]);
    assert_eq!(resolve_origin(&h, None, true).unwrap(), "http://example.com");
}

#[test]
fn forwarded_host_is_ignored_by_default() {
    let h = headers(&[("host", "thermasim.com"), ("x-forwarded-host", "evil.example")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://thermasim.com");
}

#[test]
fn forwarded_proto_is_ignored_by_default() {
    let h = headers(&[("host", "thermasim.com"), ("x-forwarded-proto", "https")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://thermasim.com");
}

#[test]
fn trusted_forwarded_falls_back_to_host_without_forwarded_host() {
    let h = headers(&[("host", "thermasim.com"), ("x-forwarded-proto", "https")]);
    assert_eq!(resolve_origin(&h, None, true).unwrap(), "https://thermasim.com");
}

#[test]
fn host_is_lowercased() {
    let h = headers(&[("host", "Example.COM")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://example.com");
}

#[test]
fn missing_host_is_rejected() {
    assert_eq!(resolve_origin(&HeaderMap::new(), None, false).unwrap_err(), OriginRejection::MissingHost);
}

#[test]
fn host_with_path_is_rejected() {
    let h = headers(&[("host", "example.com/evil")]);
    assert!(matches!(resolve_origin(&h, None, false), Err(OriginRejection::InvalidHost(_))));
}

#[test]
fn ipv6_host_is_accepted() {
    let h = headers(&[("host", "[::1]:3000")]);
    assert_eq!(resolve_origin(&h, None, false).unwrap(), "http://[::1]:3000");
}

#[test]
fn rejection_maps_to_bad_request() {
    let response = OriginRejection::MissingHost.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
