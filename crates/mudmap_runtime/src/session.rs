//! Session state: triggers wired to an automapper, a map, and a host.
//!
//! Lines of MUD output go through [`Session::feed_line`], which runs the
//! three automapper triggers. Lines typed by the player go through
//! [`Session::execute`], which also understands `#` client commands:
//!
//! | Command | Effect |
//! |---|---|
//! | `#vars` | list client variables |
//! | `#vars name=value` | set a client variable |
//! | `#map` | summarize the map |
//! | `#map on` / `#map off` | toggle the map |
//! | `#triggers` | list triggers and how often they fired |
//! | `#save path` / `#load path` | write or read a map snapshot |
//! | `#help` | list commands |
//! | `#quit` | leave the console, handled by [`Repl`](crate::Repl) |

use std::fmt::Write as _;
use std::fs;
use std::io::{Stdout, Write};
use std::path::Path;

use mudmap_core::{Automapper, AutomapperConfig, Host, MapStore};
use mudmap_foundation::{Error, ErrorContext, Result};
use mudmap_store::{MemoryMapStore, Room};
use mudmap_triggers::{
    ExitsPattern, MovementPattern, RoomTitlePattern, TriggerInfo, TriggerRegistry,
};

use crate::host::ConsoleHost;
use crate::serialize::{self, MapSnapshot};

/// Everything a trigger callback can touch.
#[derive(Debug)]
pub struct MapperContext<W = Stdout> {
    /// The commit engine.
    pub mapper: Automapper,
    /// The room graph.
    pub store: MemoryMapStore,
    /// The host client.
    pub host: ConsoleHost<W>,
}

/// A running automapper session.
pub struct Session<W = Stdout> {
    triggers: TriggerRegistry<MapperContext<W>>,
    context: MapperContext<W>,
    lines: u64,
}

impl Session<Stdout> {
    /// Creates a session echoing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(ConsoleHost::stdout(), AutomapperConfig::default())
    }
}

impl Default for Session<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + 'static> Session<W> {
    /// Creates a session over an empty map and loads the automapper.
    pub fn with_host(host: ConsoleHost<W>, config: AutomapperConfig) -> Self {
        let mut session = Self {
            triggers: Self::install_triggers(),
            context: MapperContext {
                mapper: Automapper::with_config(config),
                store: MemoryMapStore::new(),
                host,
            },
            lines: 0,
        };
        session.load();
        session
    }

    fn install_triggers() -> TriggerRegistry<MapperContext<W>> {
        let mut triggers = TriggerRegistry::new();

        triggers.register(RoomTitlePattern, |ctx: &mut MapperContext<W>, _, caps| {
            let MapperContext {
                mapper,
                store,
                host,
            } = ctx;
            if let Some(commit) = mapper.on_room(caps.get(1), caps.get(2), store, host) {
                tracing::debug!(?commit, "room committed");
            }
        });

        triggers.register(ExitsPattern, |ctx: &mut MapperContext<W>, _, caps| {
            let MapperContext {
                mapper,
                store,
                host,
            } = ctx;
            if let Some(commit) = mapper.on_exits(caps.get(1), store, host) {
                tracing::debug!(?commit, "room committed");
            }
        });

        triggers.register(MovementPattern, |ctx: &mut MapperContext<W>, _, caps| {
            let MapperContext { mapper, host, .. } = ctx;
            if let Some(dir) = mapper.on_movement(caps.get(1), host) {
                tracing::debug!(%dir, "movement recorded");
            }
        });

        triggers
    }

    fn load(&mut self) {
        let MapperContext {
            mapper,
            store,
            host,
        } = &mut self.context;
        mapper.on_load(host);
        store.set_map_enabled(host.is_map_enabled());
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The trigger context.
    #[must_use]
    pub const fn context(&self) -> &MapperContext<W> {
        &self.context
    }

    /// The room graph.
    #[must_use]
    pub const fn store(&self) -> &MemoryMapStore {
        &self.context.store
    }

    /// The commit engine.
    #[must_use]
    pub const fn mapper(&self) -> &Automapper {
        &self.context.mapper
    }

    /// The host client.
    #[must_use]
    pub const fn host(&self) -> &ConsoleHost<W> {
        &self.context.host
    }

    /// The host client, mutably.
    pub fn host_mut(&mut self) -> &mut ConsoleHost<W> {
        &mut self.context.host
    }

    /// Registered triggers in firing order.
    #[must_use]
    pub fn triggers(&self) -> Vec<TriggerInfo> {
        self.triggers.triggers()
    }

    /// Number of MUD output lines fed so far.
    #[must_use]
    pub const fn lines_fed(&self) -> u64 {
        self.lines
    }

    /// Consumes the session, returning the host.
    pub fn into_host(self) -> ConsoleHost<W> {
        self.context.host
    }

    // =========================================================================
    // MUD output
    // =========================================================================

    /// Runs the triggers over one line of MUD output.
    ///
    /// Returns how many triggers fired.
    pub fn feed_line(&mut self, line: &str) -> usize {
        self.lines += 1;
        self.triggers.dispatch(line, &mut self.context)
    }

    /// Feeds every line of `text`. Returns the total number of trigger firings.
    pub fn feed_text(&mut self, text: &str) -> usize {
        text.lines().map(|line| self.feed_line(line)).sum()
    }

    /// Replays a transcript file of MUD output.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn replay_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read {}: {e}", path.display()))
                .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;

        let fired = self.feed_text(&text);
        tracing::info!(
            path = %path.display(),
            fired,
            rooms = self.store().room_count(),
            "transcript replayed"
        );
        Ok(fired)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Captures the map and client variables.
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            store: self.context.store.clone(),
            variables: self
                .context
                .host
                .variables()
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }

    /// Replaces the map and client variables. The map-enabled flag follows
    /// the host, not the snapshot.
    pub fn restore(&mut self, snapshot: MapSnapshot) {
        let MapSnapshot { mut store, variables } = snapshot;
        store.set_map_enabled(self.context.host.is_map_enabled());
        self.context.store = store;
        self.context.host.replace_variables(variables);
        self.context.mapper.reset();
    }

    /// Saves a snapshot to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        serialize::save_to_file(&self.snapshot(), path)
    }

    /// Loads a snapshot from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let snapshot = serialize::load_from_file(path)?;
        self.restore(snapshot);
        Ok(())
    }

    // =========================================================================
    // Player input
    // =========================================================================

    /// Handles a line typed by the player: `#` commands are executed, anything
    /// else is treated as MUD output.
    ///
    /// # Errors
    ///
    /// Returns an error if a command is malformed or fails.
    pub fn execute(&mut self, input: &str) -> Result<()> {
        let trimmed = input.trim();
        let Some(command) = trimmed.strip_prefix('#') else {
            self.feed_line(input);
            return Ok(());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name, arg) {
            ("vars", "") => self.list_variables(),
            ("vars", assignment) => self.assign_variable(assignment)?,
            ("map", "") => self.describe_map(),
            ("map", "on") => self.set_map_enabled(true),
            ("map", "off") => self.set_map_enabled(false),
            ("triggers", "") => self.list_triggers(),
            ("save", path) if !path.is_empty() => {
                self.save(path)?;
                self.echo(&format!("saved {} rooms to {path}", self.store().room_count()));
            }
            ("load", path) if !path.is_empty() => {
                self.load_snapshot(path)?;
                self.echo(&format!("loaded {} rooms from {path}", self.store().room_count()));
            }
            ("help", "") => self.print_help(),
            ("save" | "load", _) => {
                return Err(Error::invalid_command(format!("#{name} requires a path")));
            }
            _ => return Err(Error::invalid_command(format!("unknown command: {trimmed}"))),
        }
        Ok(())
    }

    fn echo(&mut self, message: &str) {
        self.context.host.echo(message);
    }

    fn list_variables(&mut self) {
        let lines: Vec<String> = self
            .context
            .host
            .sorted_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        if lines.is_empty() {
            self.echo("no variables");
        }
        for line in lines {
            self.echo(&line);
        }
    }

    fn assign_variable(&mut self, assignment: &str) -> Result<()> {
        let Some((name, value)) = assignment.split_once('=') else {
            return Err(Error::invalid_command(format!(
                "expected #vars name=value, got #vars {assignment}"
            )));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_command("variable name is empty"));
        }
        self.context.host.set_variable(name, value.trim());
        Ok(())
    }

    fn set_map_enabled(&mut self, enabled: bool) {
        self.context.host.set_map_enabled(enabled);
        self.context.store.set_map_enabled(enabled);
        self.echo(if enabled { "map on" } else { "map off" });
    }

    fn describe_map(&mut self) {
        let text = describe_store(&self.context.store);
        for line in text.lines() {
            self.context.host.echo(line);
        }
    }

    fn list_triggers(&mut self) {
        for info in self.triggers() {
            let state = if info.enabled { "on" } else { "off" };
            self.echo(&format!(
                "{} {state} fired={} {}",
                info.id, info.fired, info.pattern
            ));
        }
    }

    fn print_help(&mut self) {
        for line in HELP.lines() {
            self.echo(line);
        }
    }
}

const HELP: &str = "#vars               list client variables
#vars name=value    set a client variable
#map                summarize the map
#map on|off         toggle the map
#triggers           list triggers
#save PATH          save a map snapshot
#load PATH          load a map snapshot
#help               show this list
#quit               leave the console";

fn describe_room(room: &Room, current: bool) -> String {
    let mut line = format!(
        "{} {} [{}] at {}",
        if current { "*" } else { " " },
        room.name(),
        room.id(),
        room.coordinate()
    );
    if let Some(zone) = room.zone() {
        let _ = write!(line, " in {zone}");
    }
    let exits: Vec<String> = room
        .exits()
        .map(|(dir, target)| match target {
            Some(target) => format!("{dir}->{target}"),
            None => format!("{dir}->?"),
        })
        .collect();
    if !exits.is_empty() {
        let _ = write!(line, " exits: {}", exits.join(", "));
    }
    line
}

/// Renders the map as text, one room per line, the current room marked `*`.
#[must_use]
pub fn describe_store(store: &MemoryMapStore) -> String {
    let mut text = format!(
        "{} rooms, map {}",
        store.room_count(),
        if store.is_enabled() { "on" } else { "off" }
    );
    if let Some(current) = store.get_current_room() {
        let _ = write!(text, ", current: {} [{}]", current.name, current.id);
    }
    for room in store.rooms() {
        text.push('\n');
        text.push_str(&describe_room(room, store.current_id() == Some(room.id())));
    }
    text
}

impl<W> std::fmt::Debug for Session<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("triggers", &self.triggers)
            .field("rooms", &self.context.store.room_count())
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
