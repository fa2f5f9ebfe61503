//! Error types for the domain layer.

/// Errors raised while constructing domain values.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Seat counts other than 2, 3, or 4 have no capacity class.
    #[error("invalid seat count: {0}")]
    InvalidCapacity(u8),
}
