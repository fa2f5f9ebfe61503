//! In-memory store: the reference [`Store`] implementation.
//!
//! Backs the test suites and development setups. A single mutex
//! serializes all access, which also provides the transaction-per-call
//! isolation the lobby expects from real backends — no two operations
//! ever interleave their read-check-mutate-save sequences.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cardroom_domain::{
    BlacklistEntry, BlacklistId, Member, MemberId, Page, PageRequest, Room, RoomBlacklist,
    RoomFilter, RoomId, SpectateRoom,
};

use crate::{Store, StoreError};

#[derive(Default)]
struct Inner {
    members: HashMap<MemberId, Member>,
    rooms: HashMap<RoomId, Room>,
    /// Galleries keyed by their owning room (one-to-one).
    spectate_rooms: HashMap<RoomId, SpectateRoom>,
    blacklists: HashMap<BlacklistId, RoomBlacklist>,
    /// Index from room to its blacklist container. Kept in sync with
    /// `blacklists` on every save.
    blacklist_by_room: HashMap<RoomId, BlacklistId>,
    /// Banned-member records grouped by container.
    entries: HashMap<BlacklistId, Vec<MemberId>>,
}

/// A [`Store`] backed by process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a member directly.
    ///
    /// Accounts are created by the account layer in production; tests and
    /// development setups seed them through this helper.
    pub fn add_member(&self, member: Member) {
        self.lock().members.insert(member.id, member);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned mutex only means another test thread panicked while
        // holding it; the data itself is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    async fn find_member(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Ok(self.lock().members.get(&id).cloned())
    }

    async fn find_member_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<Member>, StoreError> {
        Ok(self
            .lock()
            .members
            .values()
            .find(|m| m.nickname == nickname)
            .cloned())
    }

    async fn find_room_by_title(&self, title: &str) -> Result<Option<Room>, StoreError> {
        Ok(self
            .lock()
            .rooms
            .values()
            .find(|r| r.title == title)
            .cloned())
    }

    async fn count_active_rooms(&self) -> Result<usize, StoreError> {
        Ok(self.lock().rooms.len())
    }

    async fn save_room(&self, room: &Room) -> Result<(), StoreError> {
        self.lock().rooms.insert(room.id, room.clone());
        Ok(())
    }

    async fn save_member(&self, member: &Member) -> Result<(), StoreError> {
        self.lock().members.insert(member.id, member.clone());
        Ok(())
    }

    async fn find_spectate_room(
        &self,
        room_id: RoomId,
    ) -> Result<Option<SpectateRoom>, StoreError> {
        Ok(self.lock().spectate_rooms.get(&room_id).cloned())
    }

    async fn save_spectate_room(&self, spectate: &SpectateRoom) -> Result<(), StoreError> {
        self.lock()
            .spectate_rooms
            .insert(spectate.room_id, spectate.clone());
        Ok(())
    }

    async fn find_blacklist(
        &self,
        room_id: RoomId,
    ) -> Result<Option<RoomBlacklist>, StoreError> {
        let inner = self.lock();
        let Some(id) = inner.blacklist_by_room.get(&room_id) else {
            return Ok(None);
        };
        inner.blacklists.get(id).cloned().map(Some).ok_or_else(|| {
            StoreError::Inconsistent(format!(
                "blacklist index for {room_id} points at missing container {id}"
            ))
        })
    }

    async fn save_blacklist(&self, blacklist: &RoomBlacklist) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner
            .blacklist_by_room
            .insert(blacklist.room_id, blacklist.id);
        inner.blacklists.insert(blacklist.id, blacklist.clone());
        Ok(())
    }

    async fn add_blacklist_entry(&self, entry: &BlacklistEntry) -> Result<(), StoreError> {
        self.lock()
            .entries
            .entry(entry.blacklist_id)
            .or_default()
            .push(entry.member_id);
        Ok(())
    }

    async fn is_blacklisted(
        &self,
        blacklist_id: BlacklistId,
        member_id: MemberId,
    ) -> Result<bool, StoreError> {
        Ok(self
            .lock()
            .entries
            .get(&blacklist_id)
            .is_some_and(|banned| banned.contains(&member_id)))
    }

    async fn search_rooms(
        &self,
        filter: &RoomFilter,
        page: PageRequest,
    ) -> Result<Page<Room>, StoreError> {
        let inner = self.lock();
        let mut matching: Vec<&Room> =
            inner.rooms.values().filter(|r| filter.matches(r)).collect();
        // HashMap iteration order is arbitrary; sort so pages are stable.
        matching.sort_by_key(|r| r.id.0);
        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .cloned()
            .collect();
        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_domain::{RoomCapacity, RoomVisibility};

    fn member(id: u64, nickname: &str) -> Member {
        Member::new(MemberId(id), nickname)
    }

    fn room(id: u64, title: &str) -> Room {
        Room::new(
            RoomId(id),
            title,
            RoomCapacity::Four,
            RoomVisibility::Public,
            MemberId(1),
        )
    }

    #[tokio::test]
    async fn test_find_member_by_id_and_nickname() {
        let store = MemoryStore::new();
        store.add_member(member(1, "alice"));

        let by_id = store.find_member(MemberId(1)).await.unwrap();
        assert_eq!(by_id.unwrap().nickname, "alice");

        let by_nick = store.find_member_by_nickname("alice").await.unwrap();
        assert_eq!(by_nick.unwrap().id, MemberId(1));

        assert!(store.find_member(MemberId(9)).await.unwrap().is_none());
        assert!(
            store
                .find_member_by_nickname("bob")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_save_member_overwrites_existing_row() {
        let store = MemoryStore::new();
        store.add_member(member(1, "alice"));

        let mut updated = member(1, "alice");
        updated.current_room = Some(RoomId(5));
        store.save_member(&updated).await.unwrap();

        let found = store.find_member(MemberId(1)).await.unwrap().unwrap();
        assert_eq!(found.current_room, Some(RoomId(5)));
    }

    #[tokio::test]
    async fn test_find_room_by_title_is_exact_match() {
        let store = MemoryStore::new();
        store.save_room(&room(1, "Table1")).await.unwrap();

        assert!(
            store
                .find_room_by_title("Table1")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            store
                .find_room_by_title("table1")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_count_active_rooms() {
        let store = MemoryStore::new();
        assert_eq!(store.count_active_rooms().await.unwrap(), 0);

        store.save_room(&room(1, "a")).await.unwrap();
        store.save_room(&room(2, "b")).await.unwrap();
        assert_eq!(store.count_active_rooms().await.unwrap(), 2);

        // Saving the same room again is an upsert, not a new row.
        store.save_room(&room(2, "b")).await.unwrap();
        assert_eq!(store.count_active_rooms().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_blacklist_container_and_entries() {
        let store = MemoryStore::new();
        let blacklist = RoomBlacklist::new(BlacklistId(1), RoomId(1));
        store.save_blacklist(&blacklist).await.unwrap();

        let found = store.find_blacklist(RoomId(1)).await.unwrap().unwrap();
        assert_eq!(found.id, BlacklistId(1));

        assert!(
            !store
                .is_blacklisted(BlacklistId(1), MemberId(2))
                .await
                .unwrap()
        );
        store
            .add_blacklist_entry(&BlacklistEntry::new(BlacklistId(1), MemberId(2)))
            .await
            .unwrap();
        assert!(
            store
                .is_blacklisted(BlacklistId(1), MemberId(2))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_find_blacklist_missing_room_returns_none() {
        let store = MemoryStore::new();
        assert!(store.find_blacklist(RoomId(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_spectate_room_round_trip() {
        let store = MemoryStore::new();
        let gallery = SpectateRoom::new(RoomId(1), 10);
        store.save_spectate_room(&gallery).await.unwrap();

        let found = store.find_spectate_room(RoomId(1)).await.unwrap().unwrap();
        assert_eq!(found.capacity, 10);
        assert!(store.find_spectate_room(RoomId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_rooms_filters_and_orders_by_id() {
        let store = MemoryStore::new();
        store.save_room(&room(3, "Casual Table")).await.unwrap();
        store.save_room(&room(1, "High Stakes")).await.unwrap();
        store.save_room(&room(2, "Casual Corner")).await.unwrap();

        let filter = RoomFilter {
            title_contains: Some("Casual".into()),
            ..RoomFilter::default()
        };
        let page = store
            .search_rooms(&filter, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        let ids: Vec<u64> = page.items.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_search_rooms_paginates() {
        let store = MemoryStore::new();
        for i in 1..=5 {
            store.save_room(&room(i, &format!("room-{i}"))).await.unwrap();
        }

        let first = store
            .search_rooms(&RoomFilter::default(), PageRequest::new(0, 2))
            .await
            .unwrap();
        let last = store
            .search_rooms(&RoomFilter::default(), PageRequest::new(2, 2))
            .await
            .unwrap();

        assert_eq!(first.total, 5);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].id, RoomId(1));
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, RoomId(5));
    }
}
