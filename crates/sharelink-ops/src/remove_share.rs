//! Remove a share from the server.

use async_trait::async_trait;
use http::Method;
use tracing::{debug, warn};

use sharelink_core::envelope::RemoteOperationResult;
use sharelink_core::traits::{RemoteOperation, SessionConnection};
use sharelink_core::wire::HttpRequest;
use sharelink_entity::RemoteShare;

use crate::{SHARES_ROUTE, ocs};

/// Removes an existing share. Success carries an empty payload.
#[derive(Debug, Clone)]
pub struct RemoveShareOperation {
    /// Remote identifier of the share to remove.
    pub share_id: i64,
}

impl RemoveShareOperation {
    /// Create a remove operation for `share_id`.
    pub fn new(share_id: i64) -> Self {
        Self { share_id }
    }

    fn request(&self) -> HttpRequest {
        HttpRequest::new(
            Method::DELETE,
            format!("{SHARES_ROUTE}/{}", self.share_id),
        )
        .with_query("format", "json")
        .with_header("OCS-APIRequest", "true")
    }
}

#[async_trait]
impl RemoteOperation for RemoveShareOperation {
    type Output = Vec<RemoteShare>;

    async fn execute(
        &self,
        session: &dyn SessionConnection,
    ) -> RemoteOperationResult<Self::Output> {
        debug!(share_id = self.share_id, "Removing remote share");

        match session.send(self.request()).await {
            Ok(response) => ocs::parse_share_response(&response),
            Err(err) => {
                warn!(share_id = self.share_id, error = %err,
                    "Share removal failed in transport");
                ocs::failure_from_transport(err)
            }
        }
    }
}
