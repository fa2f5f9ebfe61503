//! Identity newtypes shared by every layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a member (an account, not a seat).
///
/// This is a newtype wrapper over `u64`: a `MemberId` can never be passed
/// where a [`RoomId`] is expected, even though both are `u64` underneath.
/// `#[serde(transparent)]` keeps the serialized shape a plain number, so
/// `MemberId(42)` becomes just `42` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M-{}", self.0)
    }
}

/// A unique identifier for a room (one table of the card game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

/// A unique identifier for a room's blacklist container.
///
/// Blacklist entries reference their container by this ID rather than by
/// the room ID, matching the container/entry split in the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlacklistId(pub u64);

impl fmt::Display for BlacklistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_serializes_as_plain_number() {
        // `#[serde(transparent)]` means MemberId(42) → `42`, not `{"0":42}`.
        let json = serde_json::to_string(&MemberId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_member_id_deserializes_from_plain_number() {
        let id: MemberId = serde_json::from_str("42").unwrap();
        assert_eq!(id, MemberId(42));
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(MemberId(7).to_string(), "M-7");
        assert_eq!(RoomId(3).to_string(), "R-3");
        assert_eq!(BlacklistId(9).to_string(), "B-9");
    }
}
