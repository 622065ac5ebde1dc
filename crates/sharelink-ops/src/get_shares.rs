//! Fetch the shares attached to a remote path.

use async_trait::async_trait;
use http::Method;
use tracing::{debug, warn};

use sharelink_core::envelope::RemoteOperationResult;
use sharelink_core::traits::{RemoteOperation, SessionConnection};
use sharelink_core::wire::HttpRequest;
use sharelink_entity::RemoteShare;

use crate::{SHARES_ROUTE, ocs};

/// Fetches all shares for a file or folder.
#[derive(Debug, Clone)]
pub struct GetSharesForFileOperation {
    /// Remote path to list shares for.
    pub path: String,
    /// Also return shares the path received from others.
    pub reshares: bool,
    /// Also return shares of files inside the folder.
    pub subfiles: bool,
}

impl GetSharesForFileOperation {
    /// Create a fetch operation for `path`.
    pub fn new(path: impl Into<String>, reshares: bool, subfiles: bool) -> Self {
        Self {
            path: path.into(),
            reshares,
            subfiles,
        }
    }

    fn request(&self) -> HttpRequest {
        HttpRequest::new(Method::GET, SHARES_ROUTE)
            .with_query("path", &self.path)
            .with_query("reshares", self.reshares.to_string())
            .with_query("subfiles", self.subfiles.to_string())
            .with_query("format", "json")
            .with_header("OCS-APIRequest", "true")
    }
}

#[async_trait]
impl RemoteOperation for GetSharesForFileOperation {
    type Output = Vec<RemoteShare>;

    async fn execute(
        &self,
        session: &dyn SessionConnection,
    ) -> RemoteOperationResult<Self::Output> {
        debug!(path = %self.path, reshares = self.reshares, subfiles = self.subfiles,
            "Fetching remote shares");

        match session.send(self.request()).await {
            Ok(response) => ocs::parse_share_response(&response),
            Err(err) => {
                warn!(path = %self.path, error = %err, "Share fetch failed in transport");
                ocs::failure_from_transport(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use sharelink_core::AppError;
    use sharelink_core::ResultCode;
    use sharelink_core::wire::HttpResponse;

    use crate::testing::MockSession;

    #[tokio::test]
    async fn test_request_shape() {
        let body = serde_json::json!({
            "ocs": { "meta": { "status": "ok", "statuscode": 100, "message": null }, "data": [] }
        })
        .to_string();
        let session = MockSession::respond_with(HttpResponse::new(StatusCode::OK, None, body));
        let operation = GetSharesForFileOperation::new("/Photos/", true, false);

        let result = operation.execute(&session).await;
        assert!(result.is_success());

        let request = session.sent_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, SHARES_ROUTE);
        assert_eq!(request.query_param("path"), Some("/Photos/"));
        assert_eq!(request.query_param("reshares"), Some("true"));
        assert_eq!(request.query_param("subfiles"), Some("false"));
        assert_eq!(request.query_param("format"), Some("json"));
        assert!(request.form.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failure_envelope() {
        let session = MockSession::fail_with(AppError::transport("connection reset"));
        let operation = GetSharesForFileOperation::new("/Photos/", false, false);

        let result = operation.execute(&session).await;
        assert!(!result.is_success());
        assert_eq!(result.code(), ResultCode::ServerError);
        assert!(result.data().is_empty());
    }
}
