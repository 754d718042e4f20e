//! mudmap - Incremental automapper for MUD clients
//!
//! This crate re-exports all layers of the mudmap system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: mudmap_runtime    - Session, REPL, CLI, map snapshots
//! Layer 2: mudmap_store      - In-memory room graph
//! Layer 1: mudmap_core       - Fragment decoding and the commit engine
//!          mudmap_triggers   - Line patterns and trigger dispatch
//! Layer 0: mudmap_foundation - Core types (Direction, RoomId, Error)
//! ```

pub use mudmap_core as mapper;
pub use mudmap_foundation as foundation;
pub use mudmap_runtime as runtime;
pub use mudmap_store as store;
pub use mudmap_triggers as triggers;
