//! The in-progress room observation.

use mudmap_foundation::{Direction, ExitSet, RoomId};

/// Buffered fragments of the room currently being observed.
///
/// Fragments arrive independently; the observation is complete once a room
/// id, a room name and a non-empty exit set are all present. The pending
/// direction does not take part in completeness: it only decides how the
/// complete observation is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingObservation {
    room_id: Option<RoomId>,
    room_name: Option<String>,
    exits: Option<ExitSet>,
    pending_direction: Option<Direction>,
}

impl PendingObservation {
    /// Creates an empty observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered room identifier.
    #[must_use]
    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    /// The buffered room name.
    #[must_use]
    pub fn room_name(&self) -> Option<&str> {
        self.room_name.as_deref()
    }

    /// The buffered exits.
    #[must_use]
    pub fn exits(&self) -> Option<&ExitSet> {
        self.exits.as_ref()
    }

    /// The movement announced but not yet resolved into a room.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Records the room title and identifier.
    ///
    /// The caller is responsible for trimming and validating the name.
    pub fn record_room(&mut self, name: impl Into<String>, id: RoomId) {
        self.room_name = Some(name.into());
        self.room_id = Some(id);
    }

    /// Records the exit list, replacing any previously buffered one.
    pub fn record_exits(&mut self, exits: ExitSet) {
        self.exits = Some(exits);
    }

    /// Records a fresh movement.
    ///
    /// Fragments buffered for the room being left are discarded.
    pub fn record_direction(&mut self, dir: Direction) {
        self.pending_direction = Some(dir);
        self.room_id = None;
        self.room_name = None;
        self.exits = None;
    }

    /// Returns true once id, name and at least one exit are all buffered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.room_id.is_some()
            && self.room_name.is_some()
            && self.exits.as_ref().is_some_and(|exits| !exits.is_empty())
    }

    /// Returns true if nothing at all is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drops every buffered fragment, including the pending direction.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the buffered fragments out, leaving the observation empty.
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
