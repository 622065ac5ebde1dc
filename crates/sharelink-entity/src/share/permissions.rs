//! Share permission bitmask.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Permission bitmask granted by a share.
///
/// The bit values match the server's share API: read 1, update 2, create 4,
/// delete 8, re-share 16. Unknown bits are preserved as-is so a newer
/// server does not break older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharePermissions(pub u32);

impl SharePermissions {
    /// Read access.
    pub const READ: Self = Self(1);
    /// Update access.
    pub const UPDATE: Self = Self(2);
    /// Create access (upload into a shared folder).
    pub const CREATE: Self = Self(4);
    /// Delete access.
    pub const DELETE: Self = Self(8);
    /// Permission to re-share.
    pub const SHARE: Self = Self(16);
    /// All permission bits set.
    pub const ALL: Self = Self(31);

    /// The raw bitmask value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether every bit in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the share grants read access.
    pub fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Whether the share grants update access.
    pub fn can_update(self) -> bool {
        self.contains(Self::UPDATE)
    }

    /// Whether the share grants re-sharing.
    pub fn can_reshare(self) -> bool {
        self.contains(Self::SHARE)
    }
}

impl BitOr for SharePermissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for SharePermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
