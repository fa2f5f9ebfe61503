//! Per-room blacklists: who may never come back.

use serde::{Deserialize, Serialize};

use crate::{BlacklistId, MemberId, RoomId};

/// The blacklist container owned by a single room.
///
/// Created atomically with its room. It holds no entries itself — entries
/// are separate records referencing the container, appended every time the
/// manager kicks someone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlacklist {
    pub id: BlacklistId,
    pub room_id: RoomId,
}

impl RoomBlacklist {
    pub fn new(id: BlacklistId, room_id: RoomId) -> Self {
        Self { id, room_id }
    }
}

/// A single banned-member record inside a room's blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub blacklist_id: BlacklistId,
    pub member_id: MemberId,
}

impl BlacklistEntry {
    pub fn new(blacklist_id: BlacklistId, member_id: MemberId) -> Self {
        Self {
            blacklist_id,
            member_id,
        }
    }
}
