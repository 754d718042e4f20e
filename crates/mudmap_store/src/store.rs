//! The in-memory map store.

use im::OrdMap;

use mudmap_core::{MapStore, RoomInfo};
use mudmap_foundation::{Coordinate, Direction, ExitSet, RoomId};

use crate::room::Room;

/// A room graph held in memory.
///
/// While the map is disabled every mutation is refused: `create_room`
/// returns `false`, `handle_movement` returns `None`, and the other calls
/// are ignored. Reads keep working.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryMapStore {
    rooms: OrdMap<RoomId, Room>,
    current: Option<RoomId>,
    enabled: bool,
}

impl Default for MemoryMapStore {
    fn default() -> Self {
        Self {
            rooms: OrdMap::new(),
            current: None,
            enabled: true,
        }
    }
}

impl MemoryMapStore {
    /// Creates an empty, enabled map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the map accepts mutations.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables mutations.
    pub fn set_map_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Looks up a room.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Iterates over all rooms in identifier order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.values()
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Identifier of the current room.
    #[must_use]
    pub fn current_id(&self) -> Option<&RoomId> {
        self.current.as_ref()
    }

    /// Unexplored exits of a room; empty for unknown rooms.
    #[must_use]
    pub fn unexplored_exits(&self, id: &RoomId) -> Vec<Direction> {
        self.room(id).map(Room::unexplored).unwrap_or_default()
    }

    /// Rooms carrying the given zone label.
    pub fn rooms_in_zone<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms.values().filter(move |room| room.zone() == Some(zone))
    }

    fn refuse(&self, operation: &str, id: &RoomId) -> bool {
        if self.enabled {
            return false;
        }
        tracing::debug!(operation, room = %id, "map disabled, ignoring");
        true
    }
}

impl MapStore for MemoryMapStore {
    fn get_current_room(&self) -> Option<RoomInfo> {
        self.current
            .as_ref()
            .and_then(|id| self.rooms.get(id))
            .map(Room::info)
    }

    /// Exact identifier match first, then rooms whose name contains the
    /// query (case-insensitive).
    fn search_rooms(&self, query: &str) -> Vec<RoomInfo> {
        let needle = query.to_lowercase();
        let exact = self.rooms.get(&RoomId::new(query));

        exact
            .into_iter()
            .chain(self.rooms.values().filter(|room| {
                room.id().as_str() != query
                    && !needle.is_empty()
                    && room.name().to_lowercase().contains(&needle)
            }))
            .map(Room::info)
            .collect()
    }

    fn create_room(&mut self, id: &RoomId, name: &str, at: Coordinate) -> bool {
        if self.refuse("create_room", id) {
            return false;
        }
        if self.rooms.contains_key(id) {
            tracing::warn!(room = %id, "room already exists");
            return false;
        }
        self.rooms.insert(id.clone(), Room::new(id.clone(), name, at));
        true
    }

    fn set_room_zone(&mut self, id: &RoomId, zone: &str) {
        if self.refuse("set_room_zone", id) {
            return;
        }
        match self.rooms.get_mut(id) {
            Some(room) => room.set_zone(zone),
            None => tracing::warn!(room = %id, zone, "set_room_zone on unknown room"),
        }
    }

    fn set_current_room(&mut self, id: &RoomId) {
        if self.refuse("set_current_room", id) {
            return;
        }
        if self.rooms.contains_key(id) {
            self.current = Some(id.clone());
        } else {
            tracing::warn!(room = %id, "set_current_room on unknown room");
        }
    }

    /// Adds the directions not yet known for the room; known exits, linked
    /// or not, are left as they are.
    fn add_unexplored_exits(&mut self, id: &RoomId, exits: &[Direction]) {
        if self.refuse("add_unexplored_exits", id) {
            return;
        }
        match self.rooms.get_mut(id) {
            Some(room) => {
                for dir in exits {
                    room.add_unexplored(*dir);
                }
            }
            None => tracing::warn!(room = %id, "add_unexplored_exits on unknown room"),
        }
    }

    fn handle_movement(
        &mut self,
        dir: Direction,
        name: &str,
        exits: &ExitSet,
        id: &RoomId,
    ) -> Option<RoomInfo> {
        if self.refuse("handle_movement", id) {
            return None;
        }

        let previous = self.current.clone().filter(|prev| self.rooms.contains_key(prev));

        if let Some(room) = self.rooms.get_mut(id) {
            room.set_name(name);
        } else {
            let at = previous
                .as_ref()
                .and_then(|prev| self.rooms.get(prev))
                .map_or(Coordinate::ORIGIN, |prev| prev.coordinate().step(dir));
            self.rooms.insert(id.clone(), Room::new(id.clone(), name, at));
            tracing::debug!(room = %id, %at, "room created by movement");
        }

        if let Some(prev) = previous.filter(|prev| prev != id) {
            if let Some(from) = self.rooms.get_mut(&prev) {
                from.link(dir, id.clone());
            }
            if let Some(to) = self.rooms.get_mut(id) {
                to.link_if_unexplored(dir.opposite(), prev);
            }
        }

        let room = self.rooms.get_mut(id)?;
        for exit in exits {
            room.add_unexplored(exit);
        }
        let info = room.info();
        self.current = Some(id.clone());
        Some(info)
    }
}
