//! Ordered sets of exits.

use std::fmt;

use crate::direction::Direction;

/// An ordered set of unique directions.
///
/// Insertion order is preserved and repeated directions are dropped, so the
/// set reads back in the order the exits first appeared on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExitSet {
    dirs: Vec<Direction>,
}

impl ExitSet {
    /// Creates an empty exit set.
    #[must_use]
    pub const fn new() -> Self {
        Self { dirs: Vec::new() }
    }

    /// Adds a direction unless it is already present.
    ///
    /// Returns `true` if the direction was added.
    pub fn insert(&mut self, dir: Direction) -> bool {
        if self.dirs.contains(&dir) {
            return false;
        }
        self.dirs.push(dir);
        true
    }

    /// Returns true if the direction is in the set.
    #[must_use]
    pub fn contains(&self, dir: Direction) -> bool {
        self.dirs.contains(&dir)
    }

    /// Number of exits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Returns true if there are no exits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterates over the exits in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.dirs.iter().copied()
    }

    /// Returns the exits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Direction] {
        &self.dirs
    }
}

impl FromIterator<Direction> for ExitSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Direction> for ExitSet {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for dir in iter {
            self.insert(dir);
        }
    }
}

impl<'a> IntoIterator for &'a ExitSet {
    type Item = Direction;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Direction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter().copied()
    }
}

/// Comma-joined names, e.g. `north,south,up`.
impl fmt::Display for ExitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.dirs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(dir.as_str())?;
        }
        Ok(())
    }
}
