//! Admission and lifecycle rules for cardroom game rooms.
//!
//! The [`Lobby`] decides whether a member may create, enter, leave, or be
//! expelled from a room, and keeps the Room↔Member links consistent while
//! doing so. It owns no storage — all entity state lives behind the
//! [`Store`](cardroom_store::Store) seam, and every operation evaluates
//! its full check chain before the first save.
//!
//! # Key types
//!
//! - [`Lobby`] — the rule engine itself
//! - [`CreateRoom`] — parameters for opening a room
//! - [`LobbyConfig`] — tunables (room ceiling, gallery capacity)
//! - [`LobbyError`], [`ErrorCode`], [`ErrorKind`] — the error taxonomy
//! - [`rules`] — standalone predicates for gates not wired in here

mod config;
mod error;
mod lobby;
pub mod rules;

pub use config::LobbyConfig;
pub use error::{ErrorCode, ErrorKind, LobbyError};
pub use lobby::{CreateRoom, Lobby};
