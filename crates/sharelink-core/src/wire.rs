//! Transport-neutral HTTP request and response descriptors.
//!
//! Remote operations describe *what* to send with [`HttpRequest`]; the
//! session implementation owns the actual transport and hands back an
//! [`HttpResponse`]. Neither type performs any I/O.

use bytes::Bytes;
use http::{Method, StatusCode};

use crate::error::AppError;
use crate::result::AppResult;

/// A request descriptor built by a remote operation.
///
/// `path` is relative to the session's base URL. Query and form parameters
/// are kept as ordered pairs so the request the session sends matches the
/// order the operation built them in.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path relative to the session base URL.
    pub path: String,
    /// Query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// URL-encoded form body parameters, in insertion order.
    pub form: Vec<(String, String)>,
    /// Additional request headers.
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a request descriptor with no parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            form: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a form body parameter.
    pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    /// Append a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a query parameter by key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a form parameter by key.
    pub fn form_param(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A response handed back by the session transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Reason phrase as sent by the server, if any.
    pub reason: Option<String>,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response descriptor.
    pub fn new(status: StatusCode, reason: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
        }
    }

    /// Interpret the body as UTF-8 text.
    pub fn text(&self) -> AppResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| AppError::serialization(format!("Response body is not UTF-8: {e}")))
    }
}
