//! Share entity and value types.

pub mod model;
pub mod permissions;

pub use model::{RemoteShare, ShareType};
pub use permissions::SharePermissions;
