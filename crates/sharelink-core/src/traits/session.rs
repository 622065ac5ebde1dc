//! Session transport boundary.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::wire::{HttpRequest, HttpResponse};

/// A connected session against the remote server.
///
/// The transport (HTTP client, TLS, authentication headers) lives entirely
/// behind this trait and is supplied by the embedding application; the
/// library only describes requests and interprets responses.
#[async_trait]
pub trait SessionConnection: Send + Sync {
    /// Base URL of the remote server this session is connected to.
    fn base_url(&self) -> &str;

    /// Deliver a request and return the raw response.
    ///
    /// Errors returned here are transport-level only (connection refused,
    /// timeout, invalid TLS). HTTP-level failures are regular responses.
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}
