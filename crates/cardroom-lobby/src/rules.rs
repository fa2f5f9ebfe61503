//! Standalone rule predicates.
//!
//! [`Lobby::start_game`](crate::Lobby::start_game) deliberately enforces
//! none of these — they exist as independent predicates so that wiring
//! one into the transition (or into a transport-layer gate) is a one-line
//! change rather than a rewrite.

use cardroom_domain::{Member, Room, RoomVisibility};

/// Returns `true` if the member is the room's manager.
///
/// Compares stable IDs; nicknames play no part in authorization.
pub fn is_room_manager(room: &Room, member: &Member) -> bool {
    room.manager == member.id
}

/// Returns `true` when every seated member other than the manager has
/// readied up.
///
/// The manager signals readiness implicitly by starting the game. Members
/// missing from `members` count as not ready.
pub fn all_members_ready(room: &Room, members: &[Member]) -> bool {
    room.members.iter().all(|id| {
        *id == room.manager
            || members
                .iter()
                .find(|m| m.id == *id)
                .is_some_and(|m| m.ready)
    })
}

/// Returns `true` when the supplied password grants entry.
///
/// Public rooms accept anything, including no password at all.
pub fn password_matches(visibility: &RoomVisibility, supplied: Option<&str>) -> bool {
    match visibility {
        RoomVisibility::Public => true,
        RoomVisibility::Private { password } => supplied == Some(password.as_str()),
    }
}
