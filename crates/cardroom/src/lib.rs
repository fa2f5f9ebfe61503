//! # Cardroom
//!
//! Room lifecycle service for a multiplayer card game: create, list,
//! enter, leave, moderate (kick/blacklist), and spectate game rooms.
//!
//! The heavy lifting happens in the member crates; this facade re-exports
//! the pieces and wires them together:
//!
//! ```text
//! cardroom-lobby   ← admission + lifecycle rules ([`Lobby`])
//!     ↕
//! cardroom-store   ← storage seam ([`Store`] trait, [`MemoryStore`])
//!     ↕
//! cardroom-domain  ← entities and value types
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use cardroom::{
//!     CreateRoom, Member, MemberId, RoomCapacity, RoomVisibility, in_memory,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cardroom::CardroomError> {
//! let lobby = in_memory();
//! lobby.store().add_member(Member::new(MemberId(1), "alice"));
//!
//! let summary = lobby
//!     .create_room(
//!         MemberId(1),
//!         CreateRoom {
//!             title: "Table1".into(),
//!             capacity: RoomCapacity::Four,
//!             visibility: RoomVisibility::Public,
//!         },
//!     )
//!     .await?;
//! assert_eq!(summary.manager_nickname, "alice");
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::CardroomError;

pub use cardroom_domain::{
    BlacklistEntry, BlacklistId, DomainError, Member, MemberId, Page, PageRequest, Room,
    RoomBlacklist, RoomCapacity, RoomFilter, RoomId, RoomState, RoomSummary, RoomVisibility,
    SpectateRoom, VisibilityKind,
};
pub use cardroom_lobby::{
    CreateRoom, ErrorCode, ErrorKind, Lobby, LobbyConfig, LobbyError, rules,
};
pub use cardroom_store::{MemoryStore, Store, StoreError};

/// A lobby backed by the in-memory store, for tests and development.
pub fn in_memory() -> Lobby<MemoryStore> {
    Lobby::new(MemoryStore::new())
}

/// Same as [`in_memory`], with explicit settings.
pub fn in_memory_with_config(config: LobbyConfig) -> Lobby<MemoryStore> {
    Lobby::with_config(MemoryStore::new(), config)
}
