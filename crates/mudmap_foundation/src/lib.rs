//! Core types shared by every mudmap layer.
//!
//! This crate provides:
//! - [`Direction`] - The six canonical movement directions and their lookup tables
//! - [`ExitSet`] - Ordered, duplicate-free sets of directions
//! - [`RoomId`] - Opaque room identifiers with zone derivation
//! - [`Coordinate`] - Integer grid positions for map layout
//! - [`Error`] - Error types for the fallible outer layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod exits;
pub mod room;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use exits::ExitSet;
pub use room::{Coordinate, RoomId};
