//! The lobby: admission and lifecycle rules for game rooms.
//!
//! Every public operation follows the same shape: load the referenced
//! entities through the store, evaluate an ordered chain of checks, and
//! only then mutate and save. A returned error therefore guarantees that
//! nothing was persisted.

use std::sync::atomic::{AtomicU64, Ordering};

use cardroom_domain::{
    BlacklistEntry, BlacklistId, MemberId, Page, PageRequest, Room, RoomBlacklist, RoomCapacity,
    RoomFilter, RoomId, RoomSummary, RoomVisibility, SpectateRoom, VisibilityKind,
};
use cardroom_store::Store;

use crate::{LobbyConfig, LobbyError, rules};

/// Counter for generating unique room IDs.
static NEXT_ROOM_ID: AtomicU64 = AtomicU64::new(1);

/// Counter for generating unique blacklist container IDs.
static NEXT_BLACKLIST_ID: AtomicU64 = AtomicU64::new(1);

/// A request to open a new room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    /// Must be unique among active rooms (case-sensitive).
    pub title: String,
    pub capacity: RoomCapacity,
    pub visibility: RoomVisibility,
}

/// The admission and lifecycle rule engine.
///
/// Stateless between calls apart from ID allocation — all entity state
/// lives behind the [`Store`]. One instance serves every caller; the
/// store's transaction isolation is what keeps concurrent calls against
/// the same room from both passing the capacity check.
pub struct Lobby<S: Store> {
    store: S,
    config: LobbyConfig,
}

impl<S: Store> Lobby<S> {
    /// Creates a lobby over the given store with default settings.
    pub fn new(store: S) -> Self {
        Self::with_config(store, LobbyConfig::default())
    }

    /// Creates a lobby with explicit settings.
    pub fn with_config(store: S, config: LobbyConfig) -> Self {
        Self { store, config }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Opens a new room with the requester as manager and sole member.
    ///
    /// The companion spectator gallery and blacklist container are
    /// created in the same call, so every room the store ever sees has
    /// both.
    pub async fn create_room(
        &self,
        requester: MemberId,
        request: CreateRoom,
    ) -> Result<RoomSummary, LobbyError> {
        let mut member = self
            .store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        // Seating the creator while they are still linked elsewhere would
        // desynchronize the Room↔Member association.
        if let Some(room) = member.current_room {
            return Err(LobbyError::AlreadyInRoom {
                member: requester,
                room,
            });
        }
        if self.store.count_active_rooms().await? >= self.config.max_rooms {
            return Err(LobbyError::RoomLimitReached(self.config.max_rooms));
        }
        if self
            .store
            .find_room_by_title(&request.title)
            .await?
            .is_some()
        {
            return Err(LobbyError::DuplicateTitle(request.title));
        }

        let room_id = RoomId(NEXT_ROOM_ID.fetch_add(1, Ordering::Relaxed));
        let mut room = Room::new(
            room_id,
            request.title,
            request.capacity,
            request.visibility,
            requester,
        );
        room.admit(&mut member);

        let gallery = SpectateRoom::new(room_id, self.config.spectate_capacity);
        let blacklist = RoomBlacklist::new(
            BlacklistId(NEXT_BLACKLIST_ID.fetch_add(1, Ordering::Relaxed)),
            room_id,
        );

        self.store.save_room(&room).await?;
        self.store.save_member(&member).await?;
        self.store.save_spectate_room(&gallery).await?;
        self.store.save_blacklist(&blacklist).await?;

        tracing::info!(
            %room_id,
            title = %room.title,
            manager = %requester,
            "room created"
        );

        Ok(summarize(&room, &member.nickname))
    }

    /// Seats the requester in the room with the given title.
    ///
    /// The checks run in a fixed order and the first failure wins — each
    /// check has its own user-facing error code, so reordering them
    /// changes observable behavior.
    pub async fn enter_room(
        &self,
        requester: MemberId,
        title: &str,
        password: Option<&str>,
    ) -> Result<(), LobbyError> {
        let mut member = self
            .store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        let mut room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;
        let blacklist = self
            .store
            .find_blacklist(room.id)
            .await?
            .ok_or(LobbyError::BlacklistNotFound(room.id))?;
        if self.store.is_blacklisted(blacklist.id, requester).await? {
            return Err(LobbyError::Blacklisted {
                member: requester,
                title: room.title,
            });
        }
        if !rules::password_matches(&room.visibility, password) {
            return Err(LobbyError::WrongPassword(room.title));
        }
        if !room.state.is_joinable() {
            return Err(LobbyError::AlreadyStarted(room.title));
        }
        if room.is_full() {
            return Err(LobbyError::RoomFull(room.title));
        }
        // Checked after the chain above so its error codes are
        // undisturbed: a member still linked to a room may not take a
        // second seat anywhere.
        if let Some(current) = member.current_room {
            return Err(LobbyError::AlreadyInRoom {
                member: requester,
                room: current,
            });
        }

        room.admit(&mut member);
        self.store.save_room(&room).await?;
        self.store.save_member(&member).await?;

        tracing::info!(
            room_id = %room.id,
            member = %requester,
            members = room.members.len(),
            "member entered"
        );
        Ok(())
    }

    /// Pages through rooms matching the filter.
    ///
    /// Pure read — no invariant is enforced here. Manager nicknames are
    /// resolved for display; a dangling manager reference degrades to a
    /// placeholder rather than failing the whole listing.
    pub async fn list_rooms(
        &self,
        filter: &RoomFilter,
        page: PageRequest,
    ) -> Result<Page<RoomSummary>, LobbyError> {
        let rooms = self.store.search_rooms(filter, page).await?;
        let mut summaries = Vec::with_capacity(rooms.items.len());
        for room in &rooms.items {
            let nickname = match self.store.find_member(room.manager).await? {
                Some(manager) => manager.nickname,
                None => {
                    tracing::warn!(
                        room_id = %room.id,
                        manager = %room.manager,
                        "manager record missing, listing with placeholder"
                    );
                    String::from("<unknown>")
                }
            };
            summaries.push(summarize(room, &nickname));
        }
        Ok(Page {
            items: summaries,
            page: rooms.page,
            size: rooms.size,
            total: rooms.total,
        })
    }

    /// Removes the requester from the room if they are seated there.
    ///
    /// Leaving a room you are not in is a successful no-op — documented
    /// behavior, not an error.
    pub async fn leave_room(&self, title: &str, requester: MemberId) -> Result<(), LobbyError> {
        let mut member = self
            .store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        let mut room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;

        if room.expel(&mut member) {
            self.store.save_room(&room).await?;
            self.store.save_member(&member).await?;
            tracing::info!(
                room_id = %room.id,
                member = %requester,
                members = room.members.len(),
                "member left"
            );
        } else {
            tracing::debug!(
                room_id = %room.id,
                member = %requester,
                "leave ignored, not a member"
            );
        }
        Ok(())
    }

    /// Forcibly removes a member from the room and bans them from
    /// re-entry.
    ///
    /// Only the room's manager may kick. The blacklist entry is appended
    /// unconditionally — kicking a member who already left still bans
    /// them. Documented behavior.
    pub async fn remove_member(
        &self,
        title: &str,
        requester: MemberId,
        target_nickname: &str,
    ) -> Result<(), LobbyError> {
        let mut room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;
        let requesting = self
            .store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        if !rules::is_room_manager(&room, &requesting) {
            return Err(LobbyError::NotRoomManager(requester, room.title));
        }
        let mut target = self
            .store
            .find_member_by_nickname(target_nickname)
            .await?
            .ok_or_else(|| LobbyError::MemberNicknameNotFound(target_nickname.to_owned()))?;
        let blacklist = self
            .store
            .find_blacklist(room.id)
            .await?
            .ok_or(LobbyError::BlacklistNotFound(room.id))?;

        if room.expel(&mut target) {
            self.store.save_room(&room).await?;
            self.store.save_member(&target).await?;
        }
        self.store
            .add_blacklist_entry(&BlacklistEntry::new(blacklist.id, target.id))
            .await?;

        tracing::info!(
            room_id = %room.id,
            target = %target.id,
            by = %requester,
            "member kicked and blacklisted"
        );
        Ok(())
    }

    /// Moves the room's game into the in-progress state.
    ///
    /// Manager identity and member readiness are not checked here; the
    /// predicates in [`rules`] exist for callers that gate the
    /// transition.
    pub async fn start_game(&self, title: &str) -> Result<(), LobbyError> {
        let mut room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;

        room.begin();
        self.store.save_room(&room).await?;

        tracing::info!(room_id = %room.id, "game started");
        Ok(())
    }

    /// Adds the requester to the room's spectator gallery.
    ///
    /// Watching does not take a seat, so the room's state and capacity
    /// are irrelevant — observing an in-progress game is the point.
    pub async fn watch_room(&self, title: &str, requester: MemberId) -> Result<(), LobbyError> {
        self.store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        let room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;
        let mut gallery = self
            .store
            .find_spectate_room(room.id)
            .await?
            .ok_or(LobbyError::SpectateNotFound(room.id))?;
        if gallery.has_watcher(requester) {
            return Err(LobbyError::AlreadyWatching {
                member: requester,
                title: room.title,
            });
        }
        if gallery.is_full() {
            return Err(LobbyError::SpectateFull(room.title));
        }

        gallery.admit(requester);
        self.store.save_spectate_room(&gallery).await?;

        tracing::info!(
            room_id = %room.id,
            member = %requester,
            watchers = gallery.watchers.len(),
            "spectator entered"
        );
        Ok(())
    }

    /// Removes the requester from the gallery.
    ///
    /// Not watching is a successful no-op, mirroring [`Lobby::leave_room`].
    pub async fn unwatch_room(&self, title: &str, requester: MemberId) -> Result<(), LobbyError> {
        self.store
            .find_member(requester)
            .await?
            .ok_or(LobbyError::MemberNotFound(requester))?;
        let room = self
            .store
            .find_room_by_title(title)
            .await?
            .ok_or_else(|| LobbyError::RoomNotFound(title.to_owned()))?;
        let mut gallery = self
            .store
            .find_spectate_room(room.id)
            .await?
            .ok_or(LobbyError::SpectateNotFound(room.id))?;

        if gallery.expel(requester) {
            self.store.save_spectate_room(&gallery).await?;
            tracing::info!(
                room_id = %room.id,
                member = %requester,
                "spectator left"
            );
        } else {
            tracing::debug!(
                room_id = %room.id,
                member = %requester,
                "unwatch ignored, not a watcher"
            );
        }
        Ok(())
    }
}

/// Builds the public projection, with the manager's nickname supplied by
/// the caller (the room itself only stores the manager's ID).
fn summarize(room: &Room, manager_nickname: &str) -> RoomSummary {
    RoomSummary {
        room_id: room.id,
        title: room.title.clone(),
        manager_nickname: manager_nickname.to_owned(),
        state: room.state,
        visibility: VisibilityKind::from(&room.visibility),
        seats: room.capacity.seats(),
        member_count: room.members.len(),
    }
}
