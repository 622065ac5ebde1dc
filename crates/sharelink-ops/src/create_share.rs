//! Create a new share on the server.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::Method;
use tracing::{debug, warn};

use sharelink_core::envelope::RemoteOperationResult;
use sharelink_core::traits::{RemoteOperation, SessionConnection};
use sharelink_core::wire::HttpRequest;
use sharelink_entity::{RemoteShare, SharePermissions, ShareType};

use crate::{EXPIRATION_DATE_FORMAT, SHARES_ROUTE, ocs};

/// Creates a share for a file or folder.
///
/// Optional fields that are unset are omitted from the request entirely;
/// the server applies its own defaults.
#[derive(Debug, Clone)]
pub struct CreateShareOperation {
    /// Remote path of the file or folder to share.
    pub path: String,
    /// Type of share to create.
    pub share_type: ShareType,
    /// User or group to share with; empty for link shares.
    pub share_with: String,
    /// Permissions to grant.
    pub permissions: SharePermissions,
    /// Display name of the share (link shares).
    pub name: String,
    /// Password protecting the share.
    pub password: Option<String>,
    /// Expiration date of the share.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Allow uploads into a publicly shared folder.
    pub public_upload: bool,
}

impl CreateShareOperation {
    /// Create a share operation with no optional attributes set.
    pub fn new(
        path: impl Into<String>,
        share_type: ShareType,
        share_with: impl Into<String>,
        permissions: SharePermissions,
    ) -> Self {
        Self {
            path: path.into(),
            share_type,
            share_with: share_with.into(),
            permissions,
            name: String::new(),
            password: None,
            expiration_date: None,
            public_upload: false,
        }
    }

    /// Set the display name of the link.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Protect the share with a password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set an expiration date.
    pub fn expiration_date(mut self, date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Allow public uploads into the shared folder.
    pub fn public_upload(mut self, allowed: bool) -> Self {
        self.public_upload = allowed;
        self
    }

    fn request(&self) -> HttpRequest {
        let mut request = HttpRequest::new(Method::POST, SHARES_ROUTE)
            .with_query("format", "json")
            .with_header("OCS-APIRequest", "true")
            .with_form("path", &self.path)
            .with_form("shareType", self.share_type.code().to_string())
            .with_form("permissions", self.permissions.to_string());

        if !self.share_with.is_empty() {
            request = request.with_form("shareWith", &self.share_with);
        }
        if !self.name.is_empty() {
            request = request.with_form("name", &self.name);
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
        if self.public_upload {
            request = request.with_form("publicUpload", "true");
        }
        request
    }
}

#[async_trait]
impl RemoteOperation for CreateShareOperation {
    type Output = Vec<RemoteShare>;

    async fn execute(
        &self,
        session: &dyn SessionConnection,
    ) -> RemoteOperationResult<Self::Output> {
        debug!(path = %self.path, share_type = ?self.share_type, "Creating remote share");

        match session.send(self.request()).await {
            Ok(response) => ocs::parse_share_response(&response),
            Err(err) => {
                warn!(path = %self.path, error = %err, "Share creation failed in transport");
                ocs::failure_from_transport(err)
            }
        }
    }
}
