//! HTTP exchange described as plain data.
//!
//! # Design
//! The dispatcher builds an `HttpRequest` and parses an `HttpResponse`
//! without touching the network. A `Transport` sits between the two and does
//! the actual I/O, so request building and reply decoding stay deterministic
//! and can be tested without a server.
//!
//! The connector only ever accepts `POST`, so the request carries no method
//! field.

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "X-BLToken";

/// Content type of the envelope body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An outbound `POST` described as plain data.
///
/// Built by `Dispatcher::build_call`. `body` is the form-encoded envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decoded `(key, value)` pairs of the form body, in wire order.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes; UTF-8 validation is part of reply decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Convenience constructor for a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
