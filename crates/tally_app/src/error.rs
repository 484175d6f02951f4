//! Error types for the Tally application layer

use thiserror::Error;

/// Main error type for widget and surface operations
#[derive(Debug, Error)]
pub enum TallyError {
    /// Surface lookup for a required element failed
    #[error("element '{name}' not found on surface")]
    MissingElement {
        /// Name the lookup was performed with
        name: String,
    },

    /// Store failure
    #[error(transparent)]
    Store(#[from] tally_store::StoreError),

    /// Persisted counter text rejected under strict parsing
    #[error(transparent)]
    Parse(#[from] tally_core::counter::CountParseError),
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;
