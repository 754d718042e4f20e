//! Canonical movement directions.
//!
//! The MUD reports directions in two different vocabularies: single glyphs
//! in the prompt's exit list (`Вых:СЮv^>`) and full words in movement
//! announcements (`Вы пошли на север`). Both resolve to [`Direction`]
//! through the static tables below.

use std::fmt;

/// One of the six canonical movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// North (`С`, `север`).
    North,
    /// South (`Ю`, `юг`).
    South,
    /// East (`В`, `восток`).
    East,
    /// West (`З`, `запад`).
    West,
    /// Up (`^`, `вверх`).
    Up,
    /// Down (`v`, `вниз`).
    Down,
}

/// Exit glyph table: one prompt character per direction and case.
pub const GLYPHS: [(char, Direction); 10] = [
    ('С', Direction::North),
    ('с', Direction::North),
    ('Ю', Direction::South),
    ('ю', Direction::South),
    ('З', Direction::West),
    ('з', Direction::West),
    ('В', Direction::East),
    ('в', Direction::East),
    ('^', Direction::Up),
    ('v', Direction::Down),
];

/// Movement phrase table, keyed by the lower-cased word.
pub const PHRASES: [(&str, Direction); 6] = [
    ("север", Direction::North),
    ("юг", Direction::South),
    ("запад", Direction::West),
    ("восток", Direction::East),
    ("вверх", Direction::Up),
    ("вниз", Direction::Down),
];

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Looks up an exit glyph.
    ///
    /// Returns `None` for characters that are not in the glyph table,
    /// including the `(`/`)` markers that wrap some exits.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        GLYPHS
            .iter()
            .find(|(candidate, _)| *candidate == glyph)
            .map(|(_, dir)| *dir)
    }

    /// Looks up a movement word, ignoring case.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let lowered = phrase.to_lowercase();
        PHRASES
            .iter()
            .find(|(word, _)| *word == lowered)
            .map(|(_, dir)| *dir)
    }

    /// Returns the lowercase English name used by the map store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Parses the English name produced by [`Direction::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.as_str() == name)
    }

    /// Returns the direction leading back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit grid offset `(dx, dy, dz)`; north is `-y`, up is `+z`.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::North => (0, -1, 0),
            Self::South => (0, 1, 0),
            Self::East => (1, 0, 0),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 0, 1),
            Self::Down => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
