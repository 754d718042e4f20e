//! Incremental room reconstruction for mudmap.
//!
//! The MUD never sends a room as one unit. A room shows up as three
//! independent lines that can arrive in any order:
//!
//! ```text
//! Вы пошли на север.                 → movement   → pending direction
//! Постоялый двор [5001]              → room title → name + id
//! 32H 120M 1499o Зауч:0 Вых:СЮv^>    → prompt     → exits
//! ```
//!
//! The [`Automapper`] buffers these fragments in a [`PendingObservation`]
//! and, once name, id and exits are all known, issues exactly one batch of
//! [`MapStore`] calls before resetting the buffer.
//!
//! # Modules
//!
//! - [`observation`] - The fragment accumulator
//! - [`decode`] - Exit glyph, movement phrase and room title decoding
//! - [`store`] - The map store interface consumed by the engine
//! - [`host`] - Diagnostic sinks and variables provided by the client
//! - [`config`] - Automapper configuration
//! - [`engine`] - The commit engine

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod decode;
pub mod engine;
pub mod host;
pub mod observation;
pub mod store;

pub use config::AutomapperConfig;
pub use engine::{Automapper, Commit};
pub use host::Host;
pub use observation::PendingObservation;
pub use store::{MapStore, RoomInfo};
