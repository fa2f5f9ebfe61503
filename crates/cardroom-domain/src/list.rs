//! Search filters, pagination, and the public room projection.

use serde::{Deserialize, Serialize};

use crate::{Room, RoomCapacity, RoomId, RoomState, RoomVisibility};

// ---------------------------------------------------------------------------
// VisibilityKind
// ---------------------------------------------------------------------------

/// Visibility without the password payload, for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityKind {
    Public,
    Private,
}

impl From<&RoomVisibility> for VisibilityKind {
    fn from(visibility: &RoomVisibility) -> Self {
        match visibility {
            RoomVisibility::Public => Self::Public,
            RoomVisibility::Private { .. } => Self::Private,
        }
    }
}

// ---------------------------------------------------------------------------
// RoomFilter
// ---------------------------------------------------------------------------

/// Which rooms a listing should include.
///
/// `Default` matches everything. The store applies this during its search
/// query; [`RoomFilter::matches`] is the reference semantics any backend
/// must reproduce.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomFilter {
    /// Case-sensitive title substring.
    pub title_contains: Option<String>,
    /// Restrict to public or private tables.
    pub visibility: Option<VisibilityKind>,
    /// Capacity classes to include; empty means all.
    pub capacities: Vec<RoomCapacity>,
    /// Only rooms with at least one free seat.
    pub only_open: bool,
}

impl RoomFilter {
    /// Returns `true` when the room passes every requested criterion.
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(needle) = &self.title_contains {
            if !room.title.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(kind) = self.visibility {
            if VisibilityKind::from(&room.visibility) != kind {
                return false;
            }
        }
        if !self.capacities.is_empty() && !self.capacities.contains(&room.capacity) {
            return false;
        }
        if self.only_open && room.is_full() {
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A zero-based page request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Index of the first item on this page.
    pub fn offset(self) -> usize {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// One page of results plus enough metadata to render paging controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    /// Total matching items across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Maps the items while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RoomSummary
// ---------------------------------------------------------------------------

/// The public projection of a room returned to clients.
///
/// Deliberately omits the password and the member ID list. The manager's
/// nickname is resolved from the store at projection time — the room
/// itself only records the manager's stable ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room_id: RoomId,
    pub title: String,
    pub manager_nickname: String,
    pub state: RoomState,
    pub visibility: VisibilityKind,
    pub seats: usize,
    pub member_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Member, MemberId};

    fn room(title: &str, capacity: RoomCapacity, visibility: RoomVisibility) -> Room {
        Room::new(RoomId(1), title, capacity, visibility, MemberId(1))
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let r = room("Table1", RoomCapacity::Two, RoomVisibility::Public);
        assert!(RoomFilter::default().matches(&r));
    }

    #[test]
    fn test_filter_title_substring_is_case_sensitive() {
        let r = room("HighRollers", RoomCapacity::Four, RoomVisibility::Public);

        let hit = RoomFilter {
            title_contains: Some("Roll".into()),
            ..RoomFilter::default()
        };
        let miss = RoomFilter {
            title_contains: Some("roll".into()),
            ..RoomFilter::default()
        };

        assert!(hit.matches(&r));
        assert!(!miss.matches(&r));
    }

    #[test]
    fn test_filter_by_visibility_kind() {
        let private = room(
            "Backroom",
            RoomCapacity::Two,
            RoomVisibility::Private {
                password: "1234".into(),
            },
        );

        let want_private = RoomFilter {
            visibility: Some(VisibilityKind::Private),
            ..RoomFilter::default()
        };
        let want_public = RoomFilter {
            visibility: Some(VisibilityKind::Public),
            ..RoomFilter::default()
        };

        assert!(want_private.matches(&private));
        assert!(!want_public.matches(&private));
    }

    #[test]
    fn test_filter_by_capacity_classes() {
        let three = room("Trio", RoomCapacity::Three, RoomVisibility::Public);

        let two_or_three = RoomFilter {
            capacities: vec![RoomCapacity::Two, RoomCapacity::Three],
            ..RoomFilter::default()
        };
        let four_only = RoomFilter {
            capacities: vec![RoomCapacity::Four],
            ..RoomFilter::default()
        };

        assert!(two_or_three.matches(&three));
        assert!(!four_only.matches(&three));
    }

    #[test]
    fn test_filter_only_open_excludes_full_rooms() {
        let mut r = room("Table1", RoomCapacity::Two, RoomVisibility::Public);
        let mut a = Member::new(MemberId(1), "a");
        let mut b = Member::new(MemberId(2), "b");
        r.admit(&mut a);
        r.admit(&mut b);

        let open_only = RoomFilter {
            only_open: true,
            ..RoomFilter::default()
        };

        assert!(!open_only.matches(&r));
        r.expel(&mut b);
        assert!(open_only.matches(&r));
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(0, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 2,
            size: 3,
            total: 11,
        };

        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.size, 3);
        assert_eq!(mapped.total, 11);
    }

    #[test]
    fn test_room_summary_json_shape() {
        // Clients depend on these field names; a rename here is a
        // breaking API change.
        let summary = RoomSummary {
            room_id: RoomId(7),
            title: "Table1".into(),
            manager_nickname: "alice".into(),
            state: RoomState::Waiting,
            visibility: VisibilityKind::Public,
            seats: 4,
            member_count: 2,
        };

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["room_id"], 7);
        assert_eq!(json["title"], "Table1");
        assert_eq!(json["manager_nickname"], "alice");
        assert_eq!(json["state"], "waiting");
        assert_eq!(json["visibility"], "public");
        assert_eq!(json["seats"], 4);
        assert_eq!(json["member_count"], 2);
    }
}
