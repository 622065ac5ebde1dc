//! Core traits defined in `sharelink-core` and implemented by other crates
//! or by the embedding application.

pub mod operation;
pub mod session;

pub use operation::RemoteOperation;
pub use session::SessionConnection;
