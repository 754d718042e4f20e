//! The room commit engine.
//!
//! The engine owns the single [`PendingObservation`] and is driven by the
//! three trigger callbacks:
//!
//! ```text
//!            movement            title / exits
//!  any ──────────────────▶ EMPTY+dir ─────────▶ partial ──▶ COMPLETE
//!                                                             │
//!                       ┌─────────────────────────────────────┤
//!                       ▼                                     ▼
//!              MOVEMENT commit (dir set)          RESYNC commit (no dir)
//!                       │                                     │
//!                       └───────────────▶ EMPTY ◀─────────────┘
//! ```
//!
//! Every commit attempt, whether the store accepts it or not, ends with an
//! empty observation. Nothing is queued or retried.

use mudmap_foundation::{Coordinate, Direction, ExitSet, RoomId};

use crate::config::{AutomapperConfig, is_truthy};
use crate::decode::{decode_exits, decode_movement, recognize_room};
use crate::host::Host;
use crate::observation::PendingObservation;
use crate::store::{MapStore, RoomInfo};

/// What a commit attempt did to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    /// A movement was recorded; carries the destination reported by the store.
    Moved(RoomInfo),
    /// The store refused the movement.
    MoveRejected,
    /// The store already had the observed room as current; nothing was sent.
    AlreadyCurrent,
    /// A new room was created and made current.
    Created,
    /// The store refused to create the room.
    CreateRejected,
    /// A known room was made current again.
    Resynced,
}

/// Rebuilds rooms from trigger fragments and commits them to a map store.
#[derive(Clone, Debug, Default)]
pub struct Automapper {
    pending: PendingObservation,
    config: AutomapperConfig,
}

impl Automapper {
    /// Creates an automapper with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an automapper with the given configuration.
    #[must_use]
    pub fn with_config(config: AutomapperConfig) -> Self {
        Self {
            pending: PendingObservation::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AutomapperConfig {
        &self.config
    }

    /// Returns the buffered fragments.
    #[must_use]
    pub const fn pending(&self) -> &PendingObservation {
        &self.pending
    }

    /// Discards the buffered fragments.
    pub fn reset(&mut self) {
        self.pending.reset();
    }

    /// Initializes host state when the automapper is loaded.
    ///
    /// Writes `"false"` to the debug variable if it is unset, enables the
    /// map and greets the player.
    pub fn on_load<H: Host + ?Sized>(&self, host: &mut H) {
        let name = &self.config.debug_variable;
        if host.variable(name).is_none_or(|value| value.is_empty()) {
            host.set_variable(name, "false");
        }

        host.set_map_enabled(true);
        host.echo(&format!("{} Script loaded", self.config.banner_prefix));
        host.echo(&format!(
            "{} Debug: #vars {name}=true/false",
            self.config.banner_prefix
        ));
    }

    /// Returns true if the host's debug variable is switched on.
    #[must_use]
    pub fn is_debug<H: Host + ?Sized>(&self, host: &H) -> bool {
        host.variable(&self.config.debug_variable)
            .is_some_and(|value| is_truthy(&value))
    }

    fn debug<H: Host + ?Sized>(&self, host: &mut H, message: &str) {
        if self.is_debug(host) {
            host.echo(&format!("{} {message}", self.config.debug_prefix));
        }
    }

    // =========================================================================
    // Trigger callbacks
    // =========================================================================

    /// Handles a room title line: group 1 is the title, group 2 the id.
    pub fn on_room<S, H>(
        &mut self,
        title: Option<&str>,
        id: Option<&str>,
        store: &mut S,
        host: &mut H,
    ) -> Option<Commit>
    where
        S: MapStore + ?Sized,
        H: Host + ?Sized,
    {
        host.log(&format!("room trigger: title={title:?} id={id:?}"));

        let (Some(title), Some(id)) = (title, id) else {
            return None;
        };
        let room = recognize_room(title, id, &self.config.title_reject)?;

        self.pending.record_room(room.name, room.id);
        self.try_commit(store, host)
    }

    /// Handles a prompt exit list: group 1 is the glyph string.
    pub fn on_exits<S, H>(&mut self, raw: Option<&str>, store: &mut S, host: &mut H) -> Option<Commit>
    where
        S: MapStore + ?Sized,
        H: Host + ?Sized,
    {
        host.log(&format!("exits trigger: raw={raw:?}"));

        let raw = raw.filter(|raw| !raw.is_empty())?;
        let exits = decode_exits(raw);
        self.debug(host, &format!("exits: {exits}"));

        self.pending.record_exits(exits);
        self.try_commit(store, host)
    }

    /// Handles a movement announcement: group 1 is the direction word.
    ///
    /// A recognized direction discards whatever was buffered for the room
    /// being left. Recording a direction never completes an observation, so
    /// no commit is attempted here.
    pub fn on_movement<H: Host + ?Sized>(
        &mut self,
        phrase: Option<&str>,
        host: &mut H,
    ) -> Option<Direction> {
        host.log(&format!("movement trigger: phrase={phrase:?}"));

        let dir = decode_movement(phrase?)?;
        self.pending.record_direction(dir);
        Some(dir)
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Commits the buffered observation if it is complete.
    ///
    /// Returns `None` without touching the store or the buffer when a
    /// fragment is still missing.
    pub fn try_commit<S, H>(&mut self, store: &mut S, host: &mut H) -> Option<Commit>
    where
        S: MapStore + ?Sized,
        H: Host + ?Sized,
    {
        host.log(&describe(&self.pending));

        if let Some(missing) = missing_fragment(&self.pending) {
            self.debug(host, &format!("commit skipped: no {missing}"));
            return None;
        }

        let observation = self.pending.take();
        let (Some(id), Some(name), Some(exits)) = (
            observation.room_id(),
            observation.room_name(),
            observation.exits(),
        ) else {
            return None;
        };

        let commit = match observation.pending_direction() {
            Some(dir) => self.commit_movement(dir, id, name, exits, store, host),
            None => self.commit_resync(id, name, exits, store, host),
        };
        Some(commit)
    }

    fn commit_movement<S, H>(
        &self,
        dir: Direction,
        id: &RoomId,
        name: &str,
        exits: &ExitSet,
        store: &mut S,
        host: &mut H,
    ) -> Commit
    where
        S: MapStore + ?Sized,
        H: Host + ?Sized,
    {
        host.log(&format!("handle_movement: dir={dir} exits={exits} room_id={id}"));

        let Some(room) = store.handle_movement(dir, name, exits, id) else {
            host.log(&format!("handle_movement rejected: dir={dir} room_id={id}"));
            self.debug(host, "handle_movement returned nothing");
            return Commit::MoveRejected;
        };

        store.set_room_zone(id, &id.zone_label());
        host.echo(&format!("{} {name} [{id}]", self.config.echo_prefix));
        Commit::Moved(room)
    }

    fn commit_resync<S, H>(
        &self,
        id: &RoomId,
        name: &str,
        exits: &ExitSet,
        store: &mut S,
        host: &mut H,
    ) -> Commit
    where
        S: MapStore + ?Sized,
        H: Host + ?Sized,
    {
        let current = store.get_current_room().map(|room| room.id);
        host.log(&format!(
            "resync: current_id={} room_id={id}",
            current.as_ref().map_or("none", RoomId::as_str)
        ));

        if current.as_ref() == Some(id) {
            host.log("resync: already current, skipping");
            return Commit::AlreadyCurrent;
        }

        let matches = store.search_rooms(id.as_str());
        let known = matches.iter().any(|room| room.id == *id);
        host.log(&format!(
            "search_rooms({id}) found {} known={known}",
            matches.len()
        ));

        if !known {
            host.log(&format!("creating room {id}"));
            if !store.create_room(id, name, Coordinate::ORIGIN) {
                host.log(&format!("create_room({id}) rejected"));
                return Commit::CreateRejected;
            }

            store.set_room_zone(id, &id.zone_label());
            store.set_current_room(id);
            if !exits.is_empty() {
                store.add_unexplored_exits(id, exits.as_slice());
                host.log(&format!("added exits: {exits}"));
            }
            host.echo(&format!("{} New: {name} [{id}]", self.config.echo_prefix));
            Commit::Created
        } else {
            host.log("room exists, setting current");
            store.set_current_room(id);
            if !exits.is_empty() {
                store.add_unexplored_exits(id, exits.as_slice());
                host.log(&format!("updated exits: {exits}"));
            }
            Commit::Resynced
        }
    }
}

fn missing_fragment(pending: &PendingObservation) -> Option<&'static str> {
    if pending.room_id().is_none() {
        Some("room id")
    } else if pending.room_name().is_none() {
        Some("room name")
    } else if pending.exits().is_none_or(ExitSet::is_empty) {
        Some("exits")
    } else {
        None
    }
}

fn describe(pending: &PendingObservation) -> String {
    format!(
        "commit attempt: room_id={} room_name={} exits={} direction={}",
        pending.room_id().map_or("none", RoomId::as_str),
        pending.room_name().unwrap_or("none"),
        pending
            .exits()
            .map_or_else(|| "none".to_string(), |exits| exits.len().to_string()),
        pending.pending_direction().map_or("none", Direction::as_str),
    )
}
