//! Session, REPL, CLI, and map snapshots for mudmap.
//!
//! This crate provides:
//! - [`Session`] - Trigger wiring between MUD output and the automapper
//! - [`Repl`] - Interactive loop feeding typed lines into a session
//! - [`RuntimeConfig`] - Command-line options of the `mudmap` binary
//! - Map snapshot serialization and deserialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod host;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use host::ConsoleHost;
pub use repl::Repl;
pub use serialize::{MapSnapshot, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{MapperContext, Session};
