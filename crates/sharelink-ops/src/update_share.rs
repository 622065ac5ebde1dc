//! Update an existing share.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::Method;
use tracing::{debug, warn};

use sharelink_core::envelope::RemoteOperationResult;
use sharelink_core::traits::{RemoteOperation, SessionConnection};
use sharelink_core::wire::HttpRequest;
use sharelink_entity::{RemoteShare, SharePermissions};

use crate::{EXPIRATION_DATE_FORMAT, SHARES_ROUTE, ocs};

/// Updates attributes of an existing share.
///
/// Only the fields that are set are sent; the server leaves the rest of the
/// stored share untouched and returns the full updated record.
#[derive(Debug, Clone, Default)]
pub struct UpdateShareOperation {
    /// Remote identifier of the share to update.
    pub share_id: i64,
    /// New display name.
    pub name: Option<String>,
    /// New password; an empty string clears the password.
    pub password: Option<String>,
    /// New expiration date.
    pub expiration_date: Option<DateTime<Utc>>,
    /// New permission bitmask.
    pub permissions: Option<SharePermissions>,
    /// New public upload flag.
    pub public_upload: Option<bool>,
}

impl UpdateShareOperation {
    /// Create an update operation with no attribute changes.
    pub fn new(share_id: i64) -> Self {
        Self {
            share_id,
            ..Self::default()
        }
    }

    /// Change the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the password. An empty string removes it.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Change the expiration date.
    pub fn expiration_date(mut self, date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Change the permission bitmask.
    pub fn permissions(mut self, permissions: SharePermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Change the public upload flag.
    pub fn public_upload(mut self, allowed: bool) -> Self {
        self.public_upload = Some(allowed);
        self
    }

    fn request(&self) -> HttpRequest {
        let mut request = HttpRequest::new(
            Method::PUT,
            format!("{SHARES_ROUTE}/{}", self.share_id),
        )
        .with_query("format", "json")
        .with_header("OCS-APIRequest", "true");

        if let Some(ref name) = self.name {
            request = request.with_form("name", name);
        }
        if let Some(ref password) = self.password {
            request = request.with_form("password", password);
        }
        if let Some(date) = self.expiration_date {
            request = request.with_form(
                "expireDate",
                date.format(EXPIRATION_DATE_FORMAT).to_string(),
            );
        }
        if let Some(permissions) = self.permissions {
            request = request.with_form("permissions", permissions.to_string());
        }
        if let Some(allowed) = self.public_upload {
            request = request.with_form("publicUpload", allowed.to_string());
        }
        request
    }
}

#[async_trait]
impl RemoteOperation for UpdateShareOperation {
    type Output = Vec<RemoteShare>;

    async fn execute(
        &self,
        session: &dyn SessionConnection,
    ) -> RemoteOperationResult<Self::Output> {
        debug!(share_id = self.share_id, "Updating remote share");

        match session.send(self.request()).await {
            Ok(response) => ocs::parse_share_response(&response),
            Err(err) => {
                warn!(share_id = self.share_id, error = %err,
                    "Share update failed in transport");
                ocs::failure_from_transport(err)
            }
        }
    }
}
