use calcd::http::parser::{parse_http_request, ParseError};
use calcd::http::request::{Method, Route};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /calculate HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"num1\":1}";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.body, Some(b"{\"num1\":1}".to_vec()));
    assert_eq!(parsed.body_text().as_deref(), Some("{\"num1\":1}"));
}

#[test]
fn test_parse_body_ignores_content_length() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 2\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, Some(b"hello".to_vec()));
}

#[test]
fn test_parse_without_separator_has_no_body() {
    let req = b"POST / HTTP/1.1\r\nHost: example.com\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, None);
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_parse_skips_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: a\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_invalid_http_method() {
    let result = parse_http_request(b"BREW / HTTP/1.1\r\n\r\n");
    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_missing_target() {
    let result = parse_http_request(b"GET\r\n\r\n");
    assert!(matches!(result, Err(ParseError::InvalidRequest)));

    let result = parse_http_request(b"\r\n\r\n");
    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_route_classification() {
    let cases: [(&[u8], Route); 7] = [
        (b"OPTIONS /calculate HTTP/1.1\r\n\r\n", Route::Preflight),
        (b"GET / HTTP/1.1\r\n\r\n", Route::Index),
        (b"GET /index.html HTTP/1.1\r\n\r\n", Route::Index),
        (b"GET /favicon.ico HTTP/1.1\r\n\r\n", Route::Unknown),
        (b"POST / HTTP/1.1\r\n\r\n{}", Route::Compute),
        (b"POST / HTTP/1.1\r\nHost: a\r\n", Route::Unknown),
        (b"DELETE / HTTP/1.1\r\n\r\n", Route::Unknown),
    ];

    for (raw, expected) in cases {
        let parsed = parse_http_request(raw).unwrap();
        assert_eq!(parsed.route(), expected, "{}", String::from_utf8_lossy(raw));
    }
}
