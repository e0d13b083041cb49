pub mod storage;

pub use storage::BrowserStore;
