//! Property Site - interaction layer for the property listing pages
//!
//! Core library providing the selected-properties cart, listing and agent
//! filtering, and dialog focus management. The browser bindings live in the
//! `frontend` crate; everything here runs natively and is tested with
//! `cargo test`.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
