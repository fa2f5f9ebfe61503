//! The room aggregate: capacity classes, visibility, the lifecycle state
//! machine, and the membership mutation helpers.

use serde::{Deserialize, Serialize};

use crate::{DomainError, Member, MemberId, RoomId};

// ---------------------------------------------------------------------------
// RoomCapacity
// ---------------------------------------------------------------------------

/// How many seats a table has.
///
/// The game supports exactly three table sizes, so this is an enum rather
/// than a bare integer — an arbitrary capacity is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCapacity {
    Two,
    Three,
    Four,
}

impl RoomCapacity {
    /// Number of seats for this capacity class.
    pub fn seats(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for RoomCapacity {
    type Error = DomainError;

    fn try_from(seats: u8) -> Result<Self, DomainError> {
        match seats {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(DomainError::InvalidCapacity(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomVisibility
// ---------------------------------------------------------------------------

/// Who may enter a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomVisibility {
    /// Anyone may enter.
    Public,
    /// Entry requires the stored password.
    Private { password: String },
}

impl RoomVisibility {
    /// Returns `true` for password-protected rooms.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private { .. })
    }
}

// ---------------------------------------------------------------------------
// RoomState
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// ```text
/// Waiting → InProgress
/// ```
///
/// - **Waiting**: the table is open; members can sit down.
/// - **InProgress**: a game is running; no new members.
///
/// End-of-game reset is owned by the game layer, so no further transitions
/// are modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomState {
    Waiting,
    InProgress,
}

impl RoomState {
    /// Returns `true` if the room is accepting new members.
    pub fn is_joinable(self) -> bool {
        matches!(self, Self::Waiting)
    }
}

impl std::fmt::Display for RoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "Waiting"),
            Self::InProgress => write!(f, "InProgress"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One table of the card game.
///
/// The member list and each member's `current_room` link form a
/// bidirectional association. Both sides are only ever updated together,
/// through [`Room::admit`] and [`Room::expel`] — never separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Unique among active rooms, case-sensitive.
    pub title: String,
    pub capacity: RoomCapacity,
    pub visibility: RoomVisibility,
    pub state: RoomState,
    /// The member who created the room. Kick and (eventually) start
    /// authority compare against this ID; the nickname is resolved only
    /// for display.
    pub manager: MemberId,
    /// Seated members in arrival order, creator first.
    pub members: Vec<MemberId>,
}

impl Room {
    /// Creates a room in the waiting state with no seats taken.
    pub fn new(
        id: RoomId,
        title: impl Into<String>,
        capacity: RoomCapacity,
        visibility: RoomVisibility,
        manager: MemberId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            capacity,
            visibility,
            state: RoomState::Waiting,
            manager,
            members: Vec::new(),
        }
    }

    /// Returns `true` when every seat is taken.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity.seats()
    }

    /// Returns `true` if the member is seated at this table.
    pub fn has_member(&self, id: MemberId) -> bool {
        self.members.contains(&id)
    }

    /// Seats a member and points their room link here.
    ///
    /// Callers are responsible for the admission checks (capacity, state,
    /// blacklist); this helper only performs the paired mutation. The
    /// ready flag is reset on every room change.
    pub fn admit(&mut self, member: &mut Member) {
        self.members.push(member.id);
        member.current_room = Some(self.id);
        member.ready = false;
    }

    /// Removes a member and clears their room link.
    ///
    /// Returns `false` — leaving both sides untouched — when the member
    /// was not seated here.
    pub fn expel(&mut self, member: &mut Member) -> bool {
        let Some(pos) = self.members.iter().position(|m| *m == member.id) else {
            return false;
        };
        self.members.remove(pos);
        member.current_room = None;
        member.ready = false;
        true
    }

    /// Moves the room into the in-progress state.
    pub fn begin(&mut self) {
        self.state = RoomState::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64) -> Member {
        Member::new(MemberId(id), format!("member-{id}"))
    }

    fn room() -> Room {
        Room::new(
            RoomId(1),
            "Table1",
            RoomCapacity::Two,
            RoomVisibility::Public,
            MemberId(1),
        )
    }

    #[test]
    fn test_capacity_seats() {
        assert_eq!(RoomCapacity::Two.seats(), 2);
        assert_eq!(RoomCapacity::Three.seats(), 3);
        assert_eq!(RoomCapacity::Four.seats(), 4);
    }

    #[test]
    fn test_capacity_try_from_valid_counts() {
        assert_eq!(RoomCapacity::try_from(2).unwrap(), RoomCapacity::Two);
        assert_eq!(RoomCapacity::try_from(3).unwrap(), RoomCapacity::Three);
        assert_eq!(RoomCapacity::try_from(4).unwrap(), RoomCapacity::Four);
    }

    #[test]
    fn test_capacity_try_from_invalid_count_errors() {
        assert!(RoomCapacity::try_from(5).is_err());
        assert!(RoomCapacity::try_from(0).is_err());
    }

    #[test]
    fn test_state_is_joinable() {
        assert!(RoomState::Waiting.is_joinable());
        assert!(!RoomState::InProgress.is_joinable());
    }

    #[test]
    fn test_visibility_is_private() {
        assert!(!RoomVisibility::Public.is_private());
        assert!(
            RoomVisibility::Private {
                password: "1234".into()
            }
            .is_private()
        );
    }

    #[test]
    fn test_admit_updates_both_sides_of_the_link() {
        let mut r = room();
        let mut m = member(1);

        r.admit(&mut m);

        assert!(r.has_member(MemberId(1)));
        assert_eq!(m.current_room, Some(r.id));
    }

    #[test]
    fn test_admit_resets_ready_flag() {
        let mut r = room();
        let mut m = member(1);
        m.set_ready(true);

        r.admit(&mut m);

        assert!(!m.ready);
    }

    #[test]
    fn test_expel_updates_both_sides_of_the_link() {
        let mut r = room();
        let mut m = member(1);
        r.admit(&mut m);

        assert!(r.expel(&mut m));

        assert!(!r.has_member(MemberId(1)));
        assert_eq!(m.current_room, None);
    }

    #[test]
    fn test_expel_non_member_is_a_no_op() {
        let mut r = room();
        let mut seated = member(1);
        r.admit(&mut seated);
        let mut stranger = member(2);
        stranger.current_room = Some(RoomId(99));

        assert!(!r.expel(&mut stranger));

        // Neither side of the link is touched.
        assert_eq!(r.members, vec![MemberId(1)]);
        assert_eq!(stranger.current_room, Some(RoomId(99)));
    }

    #[test]
    fn test_expel_preserves_arrival_order() {
        let mut r = Room::new(
            RoomId(1),
            "Table1",
            RoomCapacity::Four,
            RoomVisibility::Public,
            MemberId(1),
        );
        let mut a = member(1);
        let mut b = member(2);
        let mut c = member(3);
        r.admit(&mut a);
        r.admit(&mut b);
        r.admit(&mut c);

        r.expel(&mut b);

        assert_eq!(r.members, vec![MemberId(1), MemberId(3)]);
    }

    #[test]
    fn test_is_full_at_capacity() {
        let mut r = room();
        let mut a = member(1);
        let mut b = member(2);

        assert!(!r.is_full());
        r.admit(&mut a);
        assert!(!r.is_full());
        r.admit(&mut b);
        assert!(r.is_full());
    }

    #[test]
    fn test_begin_moves_to_in_progress() {
        let mut r = room();
        r.begin();
        assert_eq!(r.state, RoomState::InProgress);
    }
}
