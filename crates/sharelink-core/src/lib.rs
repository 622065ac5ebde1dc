//! # sharelink-core
//!
//! Core crate for ShareLink. Contains the transport-neutral request and
//! response descriptors, the remote operation result envelope, the session
//! and operation traits, configuration schemas, logging bootstrap, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other ShareLink crates.

pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod wire;

pub use envelope::{RemoteOperationResult, ResultCode};
pub use error::AppError;
pub use result::AppResult;
