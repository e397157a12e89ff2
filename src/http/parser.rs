use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
}

/// Splits one raw read into request line, headers and body.
///
/// The connection reads exactly once, so there is no incomplete state: a
/// missing `\r\n\r\n` just means the request has no body. Header lines
/// without a colon are skipped.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let (header_bytes, body) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], Some(buf[end + 4..].to_vec())),
        None => (buf, None),
    };

    let headers_str = String::from_utf8_lossy(header_bytes);
    let mut lines = headers_str.lines();

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
