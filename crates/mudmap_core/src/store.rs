//! The map store interface.
//!
//! The store owns all persistent room and graph state. The automapper only
//! issues directives through this trait and never caches what comes back.

use mudmap_foundation::{Coordinate, Direction, ExitSet, RoomId};

/// A summary of one room as reported by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomInfo {
    /// Room identifier.
    pub id: RoomId,
    /// Room name.
    pub name: String,
    /// Zone label, if one has been assigned.
    pub zone: Option<String>,
    /// Position on the map.
    pub coordinate: Coordinate,
}

/// Operations the automapper needs from a map store.
///
/// Failures are reported through `false`/`None` return values; the
/// automapper logs them and moves on.
pub trait MapStore {
    /// Returns the room the player is currently in, if known.
    fn get_current_room(&self) -> Option<RoomInfo>;

    /// Returns every room matching `query`.
    fn search_rooms(&self, query: &str) -> Vec<RoomInfo>;

    /// Creates a room. Returns `false` if the room could not be created.
    fn create_room(&mut self, id: &RoomId, name: &str, at: Coordinate) -> bool;

    /// Assigns a zone label to a room.
    fn set_room_zone(&mut self, id: &RoomId, zone: &str);

    /// Marks a room as the player's current room.
    fn set_current_room(&mut self, id: &RoomId);

    /// Registers exits whose destinations are not yet known.
    ///
    /// The automapper always sends the full observed list; merging with
    /// what the store already knows is up to the store.
    fn add_unexplored_exits(&mut self, id: &RoomId, exits: &[Direction]);

    /// Records that the player moved `dir` from the current room into the
    /// room `id`, named `name`, with the given exits.
    ///
    /// Returns the destination room, or `None` if the movement could not be
    /// recorded.
    fn handle_movement(
        &mut self,
        dir: Direction,
        name: &str,
        exits: &ExitSet,
        id: &RoomId,
    ) -> Option<RoomInfo>;
}

impl<S: MapStore + ?Sized> MapStore for &mut S {
    fn get_current_room(&self) -> Option<RoomInfo> {
        (**self).get_current_room()
    }

    fn search_rooms(&self, query: &str) -> Vec<RoomInfo> {
        (**self).search_rooms(query)
    }

    fn create_room(&mut self, id: &RoomId, name: &str, at: Coordinate) -> bool {
        (**self).create_room(id, name, at)
    }

    fn set_room_zone(&mut self, id: &RoomId, zone: &str) {
        (**self).set_room_zone(id, zone);
    }

    fn set_current_room(&mut self, id: &RoomId) {
        (**self).set_current_room(id);
    }

    fn add_unexplored_exits(&mut self, id: &RoomId, exits: &[Direction]) {
        (**self).add_unexplored_exits(id, exits);
    }

    fn handle_movement(
        &mut self,
        dir: Direction,
        name: &str,
        exits: &ExitSet,
        id: &RoomId,
    ) -> Option<RoomInfo> {
        (**self).handle_movement(dir, name, exits, id)
    }
}
