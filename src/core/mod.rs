pub mod error;
pub mod storage;
pub mod property;
pub mod cart;
pub mod filter;
pub mod agents;
pub mod overlay;

// Page-level wiring: view abstraction and the event-driven site state
pub mod view;
pub mod app;

pub use app::SiteApp;
pub use error::{Result, SiteError};
