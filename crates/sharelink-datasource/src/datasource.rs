//! Remote share data source.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use sharelink_core::RemoteOperationResult;
use sharelink_core::traits::{RemoteOperation, SessionConnection};
use sharelink_entity::{RemoteShare, SharePermissions, ShareType};

/// Executes pre-built share operations against a connected session.
///
/// The data source is a pass-through: the caller constructs the operation
/// consistent with the descriptive parameters, and the envelope the
/// operation produces is returned unchanged. Whatever result code the
/// operation reports is surfaced without interpretation or retry.
#[derive(Debug, Clone)]
pub struct RemoteShareDataSource<S> {
    /// Connected session the operations run against.
    session: Arc<S>,
}

impl<S: SessionConnection> RemoteShareDataSource<S> {
    /// Create a data source bound to `session`.
    pub fn new(session: Arc<S>) -> Self {
        Self { session }
    }

    /// Fetch the shares attached to a file or folder.
    ///
    /// Payload ordering matches the order returned by the operation.
    pub async fn get_shares_for_file<O>(
        &self,
        path: &str,
        reshare_allowed: bool,
        subfiles_included: bool,
        operation: &O,
    ) -> RemoteOperationResult<Vec<RemoteShare>>
    where
        O: RemoteOperation<Output = Vec<RemoteShare>>,
    {
        debug!(
            path = %path,
            reshare_allowed,
            subfiles_included,
            "Getting shares for file"
        );
        operation.execute(self.session.as_ref()).await
    }

    /// Create a share for a file or folder.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_share_for_file<O>(
        &self,
        path: &str,
        share_type: ShareType,
        share_with: &str,
        permissions: SharePermissions,
        name: &str,
        password: Option<&str>,
        expiration_date: Option<DateTime<Utc>>,
        public_upload: bool,
        operation: &O,
    ) -> RemoteOperationResult<Vec<RemoteShare>>
    where
        O: RemoteOperation<Output = Vec<RemoteShare>>,
    {
        debug!(
            path = %path,
            share_type = ?share_type,
            share_with = %share_with,
            permissions = %permissions,
            name = %name,
            has_password = password.is_some(),
            expiration_date = ?expiration_date,
            public_upload,
            "Inserting share for file"
        );
        operation.execute(self.session.as_ref()).await
    }

    /// Update an existing share.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_share_for_file<O>(
        &self,
        share_id: i64,
        path: &str,
        password: Option<&str>,
        expiration_date: Option<DateTime<Utc>>,
        permissions: SharePermissions,
        public_upload: bool,
        operation: &O,
    ) -> RemoteOperationResult<Vec<RemoteShare>>
    where
        O: RemoteOperation<Output = Vec<RemoteShare>>,
    {
        debug!(
            share_id,
            path = %path,
            has_password = password.is_some(),
            expiration_date = ?expiration_date,
            permissions = %permissions,
            public_upload,
            "Updating share for file"
        );
        operation.execute(self.session.as_ref()).await
    }

    /// Delete a share.
    pub async fn delete_share<O>(
        &self,
        share_id: i64,
        operation: &O,
    ) -> RemoteOperationResult<Vec<RemoteShare>>
    where
        O: RemoteOperation<Output = Vec<RemoteShare>>,
    {
        debug!(share_id, "Deleting share");
        operation.execute(self.session.as_ref()).await
    }
}
