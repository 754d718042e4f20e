//! Decoding of captured trigger groups.
//!
//! Each decoder returns `None` (or an empty set) for input it does not
//! recognize. Unknown glyphs, unknown phrases and decoration lines are not
//! errors; they are simply not room fragments.

use mudmap_foundation::{Direction, ExitSet, RoomId};

/// Characters that mark the start of an ASCII-art map line.
///
/// Such lines can look like `: | - [5001]` and would otherwise be taken for
/// a room title.
pub const DEFAULT_TITLE_REJECT: [char; 4] = [':', '|', '-', ' '];

/// One decoded exit glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExitGlyph {
    /// The direction the glyph stands for.
    pub dir: Direction,
    /// Whether the glyph appeared between `(` and `)`.
    pub bracketed: bool,
}

/// Scans a prompt exit list, keeping every recognized glyph in order
/// together with its bracket state.
///
/// `(` and `)` toggle the bracket state and are never glyphs themselves.
#[must_use]
pub fn scan_exit_glyphs(raw: &str) -> Vec<ExitGlyph> {
    let mut glyphs = Vec::new();
    let mut in_brackets = false;

    for ch in raw.chars() {
        match ch {
            '(' => in_brackets = true,
            ')' => in_brackets = false,
            _ => {
                if let Some(dir) = Direction::from_glyph(ch) {
                    glyphs.push(ExitGlyph {
                        dir,
                        bracketed: in_brackets,
                    });
                }
            }
        }
    }

    glyphs
}

/// Decodes a prompt exit list such as `СЮВv^` or `(С)В(Ю)`.
///
/// Bracketed exits (closed doors and the like) count exactly like open ones.
/// Repeated glyphs are dropped; the first occurrence fixes the order.
#[must_use]
pub fn decode_exits(raw: &str) -> ExitSet {
    scan_exit_glyphs(raw).into_iter().map(|glyph| glyph.dir).collect()
}

/// Decodes the direction word captured from a movement announcement.
#[must_use]
pub fn decode_movement(phrase: &str) -> Option<Direction> {
    Direction::from_phrase(phrase)
}

/// A validated room title line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomTitle {
    /// The trimmed room name.
    pub name: String,
    /// The room identifier.
    pub id: RoomId,
}

/// Validates a captured title and identifier.
///
/// Returns `None` if either half is empty, if the title is blank, or if the
/// trimmed title starts with one of the `reject` characters.
#[must_use]
pub fn recognize_room(title: &str, id: &str, reject: &[char]) -> Option<RoomTitle> {
    if title.is_empty() || id.is_empty() {
        return None;
    }

    let trimmed = title.trim();
    let first = trimmed.chars().next()?;
    if reject.contains(&first) {
        return None;
    }

    Some(RoomTitle {
        name: trimmed.to_string(),
        id: RoomId::new(id),
    })
}
