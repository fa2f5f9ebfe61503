//! Storage seam for the cardroom lobby.
//!
//! The lobby never talks to a database directly — every lookup and save
//! goes through the [`Store`] trait. This keeps the rule engine testable
//! (swap in [`MemoryStore`]) and keeps transaction/isolation concerns
//! where they belong: in the storage implementation.
//!
//! # How it fits in the stack
//!
//! ```text
//! Lobby layer (above)   ← evaluates admission rules, calls Store
//!     ↕
//! Store layer (this crate)  ← lookups, saves, search
//!     ↕
//! Domain layer (below)  ← entity types the seam trades in
//! ```

#![allow(async_fn_in_trait)]

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::Store;
