//! Line patterns and trigger dispatch for mudmap.
//!
//! Incoming MUD lines are matched against registered [`LinePattern`]s; each
//! match invokes the trigger's callback with the captured groups.
//!
//! # Modules
//!
//! - [`captures`] - Captured groups of a match
//! - [`pattern`] - The pattern trait and the automapper's built-in patterns
//! - [`registry`] - Trigger registration and synchronous dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod captures;
pub mod pattern;
pub mod registry;

pub use captures::Captures;
pub use pattern::{ExitsPattern, LinePattern, MovementPattern, RoomTitlePattern};
pub use registry::{Callback, TriggerId, TriggerInfo, TriggerRegistry};
