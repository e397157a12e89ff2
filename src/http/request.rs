use std::collections::HashMap;

/// HTTP request methods.
///
/// Only OPTIONS, GET and POST are routed; the rest are recognized so that a
/// well-formed request with another verb still parses and gets the generic
/// invalid-request reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    /// OPTIONS - CORS preflight
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcd::http::request::Method;
    /// assert_eq!(Method::from_str("POST"), Some(Method::POST));
    /// assert_eq!(Method::from_str("post"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// What the connection handler should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Answer with CORS headers and no body.
    Preflight,
    /// Serve the index HTML file.
    Index,
    /// Parse the body and compute.
    Compute,
    /// Anything else.
    Unknown,
}

/// A request as read from a single socket read.
///
/// `body` is `None` when the read contained no blank-line separator, which
/// is distinct from an empty body after the separator.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// The request target (e.g., "/index.html")
    pub path: String,
    pub version: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Classifies the request.
    ///
    /// A POST without a header/body separator is not a compute request.
    pub fn route(&self) -> Route {
        match self.method {
            Method::OPTIONS => Route::Preflight,
            Method::GET if self.path == "/" || self.path == "/index.html" => Route::Index,
            Method::POST if self.body.is_some() => Route::Compute,
            _ => Route::Unknown,
        }
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}
