//! # sharelink-entity
//!
//! Domain entity models for ShareLink: the remote share record and its
//! value types. Entities are plain data; all behavior lives in the
//! operation and data source crates.

pub mod share;

pub use share::{RemoteShare, SharePermissions, ShareType};
