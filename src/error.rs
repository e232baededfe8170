//! Error types for the dice engine.
//!
//! [`RollError`] is the only error surfaced to the embedder; persistence
//! failures stay behind the store/session boundary as [`StoreError`] and are
//! logged rather than propagated (a failed save must never block a roll).

use crate::record::DIE_OPTIONS;

/// Errors surfaced to the embedding UI.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    /// A die with zero faces was passed to record construction. Rejected
    /// before any random value is drawn.
    #[error("die must have at least one face")]
    ZeroFacedDie,

    /// `configure` was given a face count outside the supported set.
    #[error("unsupported die type D{0}; supported: {DIE_OPTIONS:?}")]
    UnsupportedDie(u32),

    /// `configure` was given a dice amount outside `1..=20`.
    #[error("dice amount {0} outside 1..=20")]
    CountOutOfRange(u32),
}

/// Persistence failures. Absorbed inside the crate; never crosses to the
/// embedder.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem error while writing or replacing the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
