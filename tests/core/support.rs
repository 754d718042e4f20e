//! Test doubles for the map store and the host.

use mudmap_core::{Host, MapStore, RoomInfo};
use mudmap_foundation::{Coordinate, Direction, ExitSet, RoomId};

/// One recorded map store call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateRoom(String, String),
    SetRoomZone(String, String),
    SetCurrentRoom(String),
    AddUnexploredExits(String, Vec<Direction>),
    HandleMovement(Direction, String, Vec<Direction>, String),
}

/// A store whose reads are scripted and whose writes are recorded.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub current: Option<RoomInfo>,
    pub known: Vec<RoomInfo>,
    pub refuse_create: bool,
    pub refuse_movement: bool,
    pub calls: Vec<Call>,
}

pub fn info(id: &str, name: &str) -> RoomInfo {
    RoomInfo {
        id: RoomId::new(id),
        name: name.to_string(),
        zone: None,
        coordinate: Coordinate::ORIGIN,
    }
}

impl RecordingStore {
    pub fn with_current(mut self, id: &str, name: &str) -> Self {
        self.current = Some(info(id, name));
        self
    }

    pub fn with_known(mut self, id: &str, name: &str) -> Self {
        self.known.push(info(id, name));
        self
    }
}

impl MapStore for RecordingStore {
    fn get_current_room(&self) -> Option<RoomInfo> {
        self.current.clone()
    }

    fn search_rooms(&self, query: &str) -> Vec<RoomInfo> {
        let needle = query.to_lowercase();
        self.known
            .iter()
            .filter(|room| room.id == query || room.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn create_room(&mut self, id: &RoomId, name: &str, _at: Coordinate) -> bool {
        self.calls
            .push(Call::CreateRoom(id.to_string(), name.to_string()));
        !self.refuse_create
    }

    fn set_room_zone(&mut self, id: &RoomId, zone: &str) {
        self.calls
            .push(Call::SetRoomZone(id.to_string(), zone.to_string()));
    }

    fn set_current_room(&mut self, id: &RoomId) {
        self.calls.push(Call::SetCurrentRoom(id.to_string()));
    }

    fn add_unexplored_exits(&mut self, id: &RoomId, exits: &[Direction]) {
        self.calls
            .push(Call::AddUnexploredExits(id.to_string(), exits.to_vec()));
    }

    fn handle_movement(
        &mut self,
        dir: Direction,
        name: &str,
        exits: &ExitSet,
        id: &RoomId,
    ) -> Option<RoomInfo> {
        self.calls.push(Call::HandleMovement(
            dir,
            name.to_string(),
            exits.as_slice().to_vec(),
            id.to_string(),
        ));
        (!self.refuse_movement).then(|| info(id.as_str(), name))
    }
}

/// A host that keeps everything it is told.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub log: Vec<String>,
    pub echoed: Vec<String>,
    pub variables: Vec<(String, String)>,
    pub map_enabled: Option<bool>,
}

impl RecordingHost {
    pub fn debug() -> Self {
        let mut host = Self::default();
        host.set_variable("automapper_debug", "true");
        host
    }
}

impl Host for RecordingHost {
    fn log(&mut self, message: &str) {
        self.log.push(message.to_string());
    }

    fn echo(&mut self, message: &str) {
        self.echoed.push(message.to_string());
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.variables
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.push((name.to_string(), value.to_string()));
    }

    fn set_map_enabled(&mut self, enabled: bool) {
        self.map_enabled = Some(enabled);
    }
}

impl RecordingHost {
    pub fn variable_value(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
