//! Room identifiers and map coordinates.

use std::fmt;

use crate::direction::Direction;

/// Number of consecutive room numbers that make up one zone.
pub const ZONE_SIZE: i64 = 100;

/// An opaque room identifier as captured from the room title line.
///
/// Identifiers are usually decimal vnums (`5001`) but nothing guarantees
/// that, so the raw text is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomId(String);

impl RoomId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value if the identifier is a (possibly signed)
    /// decimal integer, ignoring surrounding whitespace.
    #[must_use]
    pub fn number(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    /// Derives the zone number: the vnum floor-divided by [`ZONE_SIZE`].
    ///
    /// Identifiers that are not integers fall into zone `0`.
    #[must_use]
    pub fn zone(&self) -> i64 {
        self.number().map_or(0, |n| n.div_euclid(ZONE_SIZE))
    }

    /// Returns the zone label the map store groups rooms by, e.g. `zone_50`.
    #[must_use]
    pub fn zone_label(&self) -> String {
        format!("zone_{}", self.zone())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RoomId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl PartialEq<str> for RoomId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A grid position on the map, `z` being the vertical level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// East-west axis, east positive.
    pub x: i32,
    /// North-south axis, south positive.
    pub y: i32,
    /// Vertical axis, up positive.
    pub z: i32,
}

impl Coordinate {
    /// Placeholder position for rooms placed without a known neighbour.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the neighbouring position one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
