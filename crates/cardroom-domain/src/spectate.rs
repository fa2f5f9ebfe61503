//! The spectator gallery: a room's one-to-one companion for observers.

use serde::{Deserialize, Serialize};

use crate::{MemberId, RoomId};

/// The observer gallery attached to a single room.
///
/// Created atomically with its room and destroyed with it. Watchers are
/// not seated: watching never touches `Member::current_room`, so a member
/// can watch one table while queueing for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectateRoom {
    /// The room this gallery belongs to (one gallery per room).
    pub room_id: RoomId,
    /// Maximum simultaneous watchers.
    pub capacity: usize,
    /// Members currently watching, in arrival order.
    pub watchers: Vec<MemberId>,
}

impl SpectateRoom {
    /// Creates an empty gallery for the given room.
    pub fn new(room_id: RoomId, capacity: usize) -> Self {
        Self {
            room_id,
            capacity,
            watchers: Vec::new(),
        }
    }

    /// Returns `true` when no more watchers fit.
    pub fn is_full(&self) -> bool {
        self.watchers.len() >= self.capacity
    }

    /// Returns `true` if the member is currently watching.
    pub fn has_watcher(&self, id: MemberId) -> bool {
        self.watchers.contains(&id)
    }

    /// Adds a watcher. Callers check capacity first.
    pub fn admit(&mut self, id: MemberId) {
        self.watchers.push(id);
    }

    /// Removes a watcher; returns `false` if they were not watching.
    pub fn expel(&mut self, id: MemberId) -> bool {
        let Some(pos) = self.watchers.iter().position(|w| *w == id) else {
            return false;
        };
        self.watchers.remove(pos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_and_expel_watchers() {
        let mut gallery = SpectateRoom::new(RoomId(1), 2);
        gallery.admit(MemberId(1));

        assert!(gallery.has_watcher(MemberId(1)));
        assert!(gallery.expel(MemberId(1)));
        assert!(!gallery.has_watcher(MemberId(1)));
    }

    #[test]
    fn test_expel_absent_watcher_returns_false() {
        let mut gallery = SpectateRoom::new(RoomId(1), 2);
        assert!(!gallery.expel(MemberId(7)));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let mut gallery = SpectateRoom::new(RoomId(1), 2);
        gallery.admit(MemberId(1));
        assert!(!gallery.is_full());
        gallery.admit(MemberId(2));
        assert!(gallery.is_full());
    }
}
