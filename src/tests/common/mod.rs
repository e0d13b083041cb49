//! Common Test Utilities
//!
//! Shared fixtures for building listing pages and agent directories.

pub mod fixtures;

pub use fixtures::*;
