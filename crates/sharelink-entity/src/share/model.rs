//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::permissions::SharePermissions;

/// Type of share, with the integer codes used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ShareType {
    /// A share directly with another user.
    User,
    /// A share with a group.
    Group,
    /// A publicly accessible link.
    PublicLink,
    /// A share sent to an email address.
    Email,
    /// A federated share with a user on another server.
    Federated,
}

impl ShareType {
    /// The integer code the server uses for this share type.
    pub fn code(self) -> i32 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::PublicLink => 3,
            Self::Email => 4,
            Self::Federated => 6,
        }
    }
}

impl From<ShareType> for i32 {
    fn from(share_type: ShareType) -> i32 {
        share_type.code()
    }
}

impl TryFrom<i32> for ShareType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::User),
            1 => Ok(Self::Group),
            3 => Ok(Self::PublicLink),
            4 => Ok(Self::Email),
            6 => Ok(Self::Federated),
            other => Err(format!("unknown share type code: {other}")),
        }
    }
}

/// A share granting access to a remote file or folder.
///
/// Returned by the server; never mutated locally. An update operation
/// yields a fresh record rather than changing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteShare {
    /// Remote identifier, assigned by the server.
    pub id: i64,
    /// Type of share.
    pub share_type: ShareType,
    /// Remote path of the shared file or folder.
    pub path: String,
    /// Whether the shared resource is a folder.
    pub is_folder: bool,
    /// Display name of the share.
    pub name: String,
    /// Public link URL, for link shares.
    pub share_link: Option<String>,
    /// User or group the resource is shared with, for non-link shares.
    pub share_with: Option<String>,
    /// Permission bitmask granted by the share.
    pub permissions: SharePermissions,
    /// When the share expires (epoch seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds_option", default)]
    pub expiration_date: Option<DateTime<Utc>>,
    /// When the share was created (epoch seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds_option", default)]
    pub shared_date: Option<DateTime<Utc>>,
    /// Share token, for link shares.
    pub token: Option<String>,
}
