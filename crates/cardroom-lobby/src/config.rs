//! Lobby configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the lobby.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyConfig {
    /// Ceiling on simultaneously active rooms. Checked against a live
    /// count at creation time, never a cached one.
    pub max_rooms: usize,

    /// Watcher capacity given to every room's spectator gallery.
    pub spectate_capacity: usize,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            max_rooms: 100,
            spectate_capacity: 10,
        }
    }
}
