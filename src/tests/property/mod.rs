//! Property-based tests for the site core
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `cart_props`: selection state machine and persistence
//!   - Toggling a card twice restores the selection
//!   - The rendered count always equals the selection length
//!   - No two entries share an identity
//!   - `load(save(L)) == L`; arbitrary stored text never panics a load
//!
//! - `filter_props`: listing filter composition
//!   - No criteria never hides a card
//!   - A card is visible iff it passes each criterion on its own
//!   - Price bounds are inclusive
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.
