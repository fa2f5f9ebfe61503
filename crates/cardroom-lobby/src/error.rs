//! The lobby's error taxonomy: typed failures with machine-readable codes.

use cardroom_domain::{MemberId, RoomId};
use cardroom_store::StoreError;
use serde::{Deserialize, Serialize};

/// Errors produced while evaluating admission and lifecycle rules.
///
/// Every failed precondition is terminal for the call. The engine never
/// saves before its last check has passed, so a returned error also
/// guarantees that no entity was mutated.
#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    /// The member does not exist (or has deleted their account).
    #[error("member {0} does not exist")]
    MemberNotFound(MemberId),

    /// No member carries the given nickname. Kick requests address their
    /// target by nickname, so this is a distinct lookup failure.
    #[error("no member named {0:?}")]
    MemberNicknameNotFound(String),

    /// No active room carries the given title.
    #[error("no room titled {0:?}")]
    RoomNotFound(String),

    /// The room's blacklist container is missing. Containers are created
    /// with the room, so this indicates a broken aggregate.
    #[error("room {0} has no blacklist container")]
    BlacklistNotFound(RoomId),

    /// The room's spectator gallery is missing. Galleries are created
    /// with the room, so this indicates a broken aggregate.
    #[error("room {0} has no spectator gallery")]
    SpectateNotFound(RoomId),

    /// Another active room already uses this title.
    #[error("a room titled {0:?} already exists")]
    DuplicateTitle(String),

    /// The active-room ceiling has been reached.
    #[error("room limit reached ({0} active rooms)")]
    RoomLimitReached(usize),

    /// The member was kicked from this room before and may not return.
    #[error("member {member} is blacklisted from room {title:?}")]
    Blacklisted { member: MemberId, title: String },

    /// The supplied password does not match the room's.
    #[error("wrong password for room {0:?}")]
    WrongPassword(String),

    /// The room's game is already running.
    #[error("room {0:?} has already started")]
    AlreadyStarted(String),

    /// Every seat is taken.
    #[error("room {0:?} is full")]
    RoomFull(String),

    /// Only the room's manager may perform this operation.
    #[error("member {0} is not the manager of room {1:?}")]
    NotRoomManager(MemberId, String),

    /// The member is already seated in a room. One seat at a time.
    #[error("member {member} is already in room {room}")]
    AlreadyInRoom { member: MemberId, room: RoomId },

    /// The spectator gallery has no free slots.
    #[error("spectator gallery for room {0:?} is full")]
    SpectateFull(String),

    /// The member is already watching this room.
    #[error("member {member} is already watching room {title:?}")]
    AlreadyWatching { member: MemberId, title: String },

    /// The storage layer failed; the rule outcome is unknown.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Broad error classes for transports to map onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A referenced member or room does not exist.
    NotFound,
    /// A uniqueness rule was violated.
    Conflict,
    /// The caller is not allowed to do this.
    Forbidden,
    /// The request itself is wrong (e.g. bad password).
    BadRequest,
    /// Infrastructure failure, not a rule outcome.
    Internal,
}

/// Machine-readable codes, stable across releases.
///
/// Serialized as `SCREAMING_SNAKE_CASE` strings (e.g. `"ROOM_FULL"`) so
/// clients can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MemberNotFound,
    RoomNotFound,
    BlacklistNotFound,
    SpectateNotFound,
    DuplicateTitle,
    RoomLimitReached,
    Blacklisted,
    WrongPassword,
    AlreadyStarted,
    RoomFull,
    NotRoomManager,
    AlreadyInRoom,
    SpectateFull,
    AlreadyWatching,
    Storage,
}

impl LobbyError {
    /// The machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MemberNotFound(_) | Self::MemberNicknameNotFound(_) => {
                ErrorCode::MemberNotFound
            }
            Self::RoomNotFound(_) => ErrorCode::RoomNotFound,
            Self::BlacklistNotFound(_) => ErrorCode::BlacklistNotFound,
            Self::SpectateNotFound(_) => ErrorCode::SpectateNotFound,
            Self::DuplicateTitle(_) => ErrorCode::DuplicateTitle,
            Self::RoomLimitReached(_) => ErrorCode::RoomLimitReached,
            Self::Blacklisted { .. } => ErrorCode::Blacklisted,
            Self::WrongPassword(_) => ErrorCode::WrongPassword,
            Self::AlreadyStarted(_) => ErrorCode::AlreadyStarted,
            Self::RoomFull(_) => ErrorCode::RoomFull,
            Self::NotRoomManager(_, _) => ErrorCode::NotRoomManager,
            Self::AlreadyInRoom { .. } => ErrorCode::AlreadyInRoom,
            Self::SpectateFull(_) => ErrorCode::SpectateFull,
            Self::AlreadyWatching { .. } => ErrorCode::AlreadyWatching,
            Self::Store(_) => ErrorCode::Storage,
        }
    }

    /// The broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MemberNotFound(_)
            | Self::MemberNicknameNotFound(_)
            | Self::RoomNotFound(_)
            | Self::BlacklistNotFound(_)
            | Self::SpectateNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateTitle(_) => ErrorKind::Conflict,
            Self::RoomLimitReached(_)
            | Self::Blacklisted { .. }
            | Self::AlreadyStarted(_)
            | Self::RoomFull(_)
            | Self::NotRoomManager(_, _)
            | Self::AlreadyInRoom { .. }
            | Self::SpectateFull(_)
            | Self::AlreadyWatching { .. } => ErrorKind::Forbidden,
            Self::WrongPassword(_) => ErrorKind::BadRequest,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}
