//! Remote server endpoint configuration.

use serde::{Deserialize, Serialize};

/// Remote file-sharing server endpoint configuration.
///
/// Consumed by session implementations when building the transport; the
/// operation layer only relies on the route being resolvable against
/// `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the remote server, e.g. `https://cloud.example.com`.
    pub base_url: String,
    /// Route of the share-management API, relative to `base_url`.
    #[serde(default = "default_shares_route")]
    pub shares_route: String,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_shares_route() -> String {
    "ocs/v2.php/apps/files_sharing/api/v1/shares".to_string()
}

fn default_user_agent() -> String {
    "ShareLink/0.1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}
