//! The `Store` trait: the lookups and saves the lobby depends on.

use cardroom_domain::{
    BlacklistEntry, BlacklistId, Member, MemberId, Page, PageRequest, Room, RoomBlacklist,
    RoomFilter, RoomId, SpectateRoom,
};

use crate::StoreError;

/// The persistence boundary of the lobby.
///
/// Presence is modeled with `Option` — a missing row is not an error at
/// this layer — and infrastructure failure with [`StoreError`]. Each lobby
/// operation is expected to run inside a single all-or-nothing transaction
/// supplied by the implementation: at minimum, serializable isolation or
/// write-locking per room row, since the engine itself holds no locks.
pub trait Store: Send + Sync {
    /// Looks up a member by their stable ID.
    async fn find_member(&self, id: MemberId) -> Result<Option<Member>, StoreError>;

    /// Looks up a member by their globally unique nickname.
    async fn find_member_by_nickname(&self, nickname: &str)
    -> Result<Option<Member>, StoreError>;

    /// Looks up an active room by its exact title (case-sensitive).
    async fn find_room_by_title(&self, title: &str) -> Result<Option<Room>, StoreError>;

    /// Counts active rooms.
    ///
    /// Issued at call time, under the same transaction as the mutation it
    /// guards, so the room ceiling is never checked against a stale count.
    async fn count_active_rooms(&self) -> Result<usize, StoreError>;

    async fn save_room(&self, room: &Room) -> Result<(), StoreError>;

    async fn save_member(&self, member: &Member) -> Result<(), StoreError>;

    async fn find_spectate_room(
        &self,
        room_id: RoomId,
    ) -> Result<Option<SpectateRoom>, StoreError>;

    async fn save_spectate_room(&self, spectate: &SpectateRoom) -> Result<(), StoreError>;

    /// Looks up the blacklist container owned by a room.
    async fn find_blacklist(&self, room_id: RoomId)
    -> Result<Option<RoomBlacklist>, StoreError>;

    async fn save_blacklist(&self, blacklist: &RoomBlacklist) -> Result<(), StoreError>;

    /// Appends a banned-member record. Duplicates are allowed — kicking
    /// the same member twice records two entries.
    async fn add_blacklist_entry(&self, entry: &BlacklistEntry) -> Result<(), StoreError>;

    /// Returns `true` if the member has at least one entry in the given
    /// blacklist.
    async fn is_blacklisted(
        &self,
        blacklist_id: BlacklistId,
        member_id: MemberId,
    ) -> Result<bool, StoreError>;

    /// Pages through rooms matching the filter, ordered by room ID.
    ///
    /// [`RoomFilter::matches`] is the reference semantics every backend
    /// must reproduce in its query.
    async fn search_rooms(
        &self,
        filter: &RoomFilter,
        page: PageRequest,
    ) -> Result<Page<Room>, StoreError>;
}
