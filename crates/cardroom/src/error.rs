//! Unified error type for the cardroom service.

use cardroom_domain::DomainError;
use cardroom_lobby::LobbyError;
use cardroom_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `cardroom` facade, callers deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum CardroomError {
    /// A domain-value construction error (e.g. an invalid seat count).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A storage-layer failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A rule-engine rejection (not found, full, blacklisted, ...).
    #[error(transparent)]
    Lobby(#[from] LobbyError),
}
