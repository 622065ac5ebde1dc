//! # sharelink-ops
//!
//! Concrete remote operations for the share-management API. Each operation
//! builds one request against the OCS share route, executes it through the
//! session, and folds the response — or the transport error — into a
//! [`sharelink_core::RemoteOperationResult`].

pub mod create_share;
pub mod get_shares;
pub mod ocs;
pub mod remove_share;
pub mod update_share;

pub use create_share::CreateShareOperation;
pub use get_shares::GetSharesForFileOperation;
pub use remove_share::RemoveShareOperation;
pub use update_share::UpdateShareOperation;

/// Route of the share-management API, relative to the session base URL.
pub const SHARES_ROUTE: &str = "ocs/v2.php/apps/files_sharing/api/v1/shares";

/// Date format the share API expects for expiration dates.
pub(crate) const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";
