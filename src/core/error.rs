// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in site operations.
///
/// None of these are fatal to the page: `SiteApp` logs and absorbs them so
/// the UI stays usable in a degraded state.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Index {index} out of bounds for selection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Focus error: {0}")]
    Focus(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
