//! Error types for the storage layer.

/// Errors surfaced by a [`Store`](crate::Store) implementation.
///
/// Rule violations are not represented here — those belong to the lobby's
/// error taxonomy. A `StoreError` means the storage itself misbehaved.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed (connection lost, query error, timeout).
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// Stored data contradicts itself, e.g. an index pointing at a row
    /// that does not exist.
    #[error("inconsistent stored data: {0}")]
    Inconsistent(String),
}
