//! # sharelink-datasource
//!
//! The remote data source for share management. A thin adapter: every call
//! executes one supplied [`sharelink_core::traits::RemoteOperation`] against
//! the held session and returns the operation's envelope verbatim, without
//! validation, retry, or error translation.

pub mod datasource;

pub use datasource::RemoteShareDataSource;
