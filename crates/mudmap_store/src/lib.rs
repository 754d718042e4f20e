//! In-memory room graph for mudmap.
//!
//! [`MemoryMapStore`] implements [`mudmap_core::MapStore`] on persistent
//! `im` collections, so cloning a whole map is cheap and snapshots share
//! structure with the live map.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod room;
pub mod store;

pub use room::Room;
pub use store::MemoryMapStore;
