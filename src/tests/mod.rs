//! Crate-level tests: page flows through `SiteApp` and property tests.

mod common;
mod mocks;
mod property;
mod unit;
