//! The member entity: who can sit down at a table.

use serde::{Deserialize, Serialize};

use crate::{MemberId, RoomId};

/// A registered member of the service.
///
/// Members are created and destroyed by the account layer, never by the
/// lobby — the lobby only moves them in and out of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identity. Authorization checks compare this, never the
    /// nickname.
    pub id: MemberId,
    /// Globally unique display name. Kick requests address their target
    /// by it.
    pub nickname: String,
    /// The room this member is seated in, if any. A member is in at most
    /// one room at a time; [`Room::admit`](crate::Room::admit) and
    /// [`Room::expel`](crate::Room::expel) keep this field in sync with
    /// the room's member list.
    pub current_room: Option<RoomId>,
    /// Whether the member has readied up for the next game. Reset on
    /// every room change.
    pub ready: bool,
}

impl Member {
    /// Creates a member with no room and the ready flag cleared.
    pub fn new(id: MemberId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            current_room: None,
            ready: false,
        }
    }

    /// Marks the member ready (or not) for the next game.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_starts_unseated_and_not_ready() {
        let m = Member::new(MemberId(1), "alice");
        assert_eq!(m.current_room, None);
        assert!(!m.ready);
    }

    #[test]
    fn test_set_ready_toggles() {
        let mut m = Member::new(MemberId(1), "alice");
        m.set_ready(true);
        assert!(m.ready);
        m.set_ready(false);
        assert!(!m.ready);
    }
}
