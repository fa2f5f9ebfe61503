//! Core domain types for the cardroom lobby.
//!
//! Entities and value types shared by every layer: identity newtypes, the
//! room aggregate and its lifecycle state machine, members, spectator
//! galleries, per-room blacklists, and the search/projection types used by
//! listings.
//!
//! Nothing in this crate performs I/O. The storage seam lives in
//! `cardroom-store`, and the rule engine that enforces admission invariants
//! lives in `cardroom-lobby`.

mod blacklist;
mod error;
mod ids;
mod list;
mod member;
mod room;
mod spectate;

pub use blacklist::{BlacklistEntry, RoomBlacklist};
pub use error::DomainError;
pub use ids::{BlacklistId, MemberId, RoomId};
pub use list::{Page, PageRequest, RoomFilter, RoomSummary, VisibilityKind};
pub use member::Member;
pub use room::{Room, RoomCapacity, RoomState, RoomVisibility};
pub use spectate::SpectateRoom;
