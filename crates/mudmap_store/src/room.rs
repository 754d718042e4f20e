//! Rooms as stored on the map.

use im::OrdMap;

use mudmap_core::RoomInfo;
use mudmap_foundation::{Coordinate, Direction, RoomId};

/// A room and its exits.
///
/// Each exit maps a direction to its destination; `None` marks an exit that
/// was seen in the prompt but not walked through yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: RoomId,
    name: String,
    zone: Option<String>,
    coordinate: Coordinate,
    exits: OrdMap<Direction, Option<RoomId>>,
}

impl Room {
    /// Creates a room without exits or zone.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            zone: None,
            coordinate,
            exits: OrdMap::new(),
        }
    }

    /// Room identifier.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zone label, if assigned.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Position on the map.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Looks up an exit. The outer `Option` is whether the exit exists, the
    /// inner one whether its destination is known.
    #[must_use]
    pub fn exit(&self, dir: Direction) -> Option<Option<&RoomId>> {
        self.exits.get(&dir).map(Option::as_ref)
    }

    /// Iterates over all exits in direction order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, Option<&RoomId>)> + '_ {
        self.exits.iter().map(|(dir, target)| (*dir, target.as_ref()))
    }

    /// Directions whose destination is still unknown.
    #[must_use]
    pub fn unexplored(&self) -> Vec<Direction> {
        self.exits
            .iter()
            .filter(|(_, target)| target.is_none())
            .map(|(dir, _)| *dir)
            .collect()
    }

    /// Summary handed to the automapper.
    #[must_use]
    pub fn info(&self) -> RoomInfo {
        RoomInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            zone: self.zone.clone(),
            coordinate: self.coordinate,
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    pub(crate) fn set_zone(&mut self, zone: &str) {
        self.zone = Some(zone.to_string());
    }

    /// Adds an unexplored exit unless the direction is already known.
    pub(crate) fn add_unexplored(&mut self, dir: Direction) -> bool {
        if self.exits.contains_key(&dir) {
            return false;
        }
        self.exits.insert(dir, None);
        true
    }

    /// Points an exit at a destination, replacing whatever was there.
    pub(crate) fn link(&mut self, dir: Direction, target: RoomId) {
        self.exits.insert(dir, Some(target));
    }

    /// Points an exit at a destination only if it is missing or unexplored.
    pub(crate) fn link_if_unexplored(&mut self, dir: Direction, target: RoomId) -> bool {
        match self.exits.get(&dir) {
            Some(Some(_)) => false,
            _ => {
                self.exits.insert(dir, Some(target));
                true
            }
        }
    }
}
