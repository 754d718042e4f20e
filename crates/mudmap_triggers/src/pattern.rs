//! Line patterns.
//!
//! The three built-in patterns reproduce the MUD client's trigger regexes:
//!
//! | Pattern | Regex | Groups |
//! |---|---|---|
//! | [`RoomTitlePattern`] | `(.+)\[(\d+)\]` | title, id |
//! | [`ExitsPattern`] | `Вых:([\(СЮЗВсюзвv^\)]+)>` | glyphs |
//! | [`MovementPattern`] | `Вы \S+ .*(север\|юг\|запад\|восток\|вверх\|вниз)` | direction word |
//!
//! Matching is unanchored search, leftmost start first, with the greedy
//! repetitions of the regexes: the title takes the *last* bracketed number,
//! the movement takes the *last* direction word.

use mudmap_foundation::Direction;
use mudmap_foundation::direction::PHRASES;

use crate::captures::Captures;

/// A pattern matched against whole lines.
pub trait LinePattern {
    /// Matches the line, returning the captured groups on success.
    fn captures(&self, line: &str) -> Option<Captures>;

    /// A human-readable form of the pattern, e.g. its regex source.
    fn describe(&self) -> String;
}

/// Cuts `text` at the first newline; `.` never crosses one.
fn single_line(text: &str) -> &str {
    text.find('\n').map_or(text, |end| &text[..end])
}

// =============================================================================
// Room title
// =============================================================================

/// Matches room title lines like `Постоялый двор [5001]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoomTitlePattern;

impl LinePattern for RoomTitlePattern {
    fn captures(&self, line: &str) -> Option<Captures> {
        line.split('\n').find_map(title_on_line)
    }

    fn describe(&self) -> String {
        r"(.+)\[(\d+)\]".to_string()
    }
}

/// Greedy title: the last `[digits]` with text before it wins.
fn title_on_line(line: &str) -> Option<Captures> {
    for (open, _) in line.rmatch_indices('[') {
        if open == 0 {
            continue;
        }

        let rest = &line[open + 1..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || rest.as_bytes().get(digits) != Some(&b']') {
            continue;
        }

        let whole = &line[..open + digits + 2];
        return Some(Captures::new(whole, &[&line[..open], &rest[..digits]]));
    }
    None
}

// =============================================================================
// Exits
// =============================================================================

const EXITS_PREFIX: &str = "Вых:";

fn is_exit_char(ch: char) -> bool {
    matches!(ch, '(' | ')') || Direction::from_glyph(ch).is_some()
}

/// Matches the exit list in the prompt, e.g. `Вых:(С)В(Ю)>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExitsPattern;

impl LinePattern for ExitsPattern {
    fn captures(&self, line: &str) -> Option<Captures> {
        let mut from = 0;
        while let Some(offset) = line[from..].find(EXITS_PREFIX) {
            let start = from + offset;
            let body_start = start + EXITS_PREFIX.len();
            let body_len: usize = line[body_start..]
                .chars()
                .take_while(|ch| is_exit_char(*ch))
                .map(char::len_utf8)
                .sum();
            let body_end = body_start + body_len;

            if body_len > 0 && line[body_end..].starts_with('>') {
                return Some(Captures::new(
                    &line[start..=body_end],
                    &[&line[body_start..body_end]],
                ));
            }
            from = body_start;
        }
        None
    }

    fn describe(&self) -> String {
        r"Вых:([\(СЮЗВсюзвv^\)]+)>".to_string()
    }
}

// =============================================================================
// Movement
// =============================================================================

const MOVEMENT_PREFIX: &str = "Вы ";

/// Matches movement announcements like `Вы пошли на север.`
#[derive(Clone, Copy, Debug, Default)]
pub struct MovementPattern;

impl MovementPattern {
    fn match_at(line: &str, start: usize) -> Option<Captures> {
        let verb_start = start + MOVEMENT_PREFIX.len();
        let verb_len: usize = line[verb_start..]
            .chars()
            .take_while(|ch| !ch.is_whitespace())
            .map(char::len_utf8)
            .sum();
        let verb_end = verb_start + verb_len;
        if verb_len == 0 || !line[verb_end..].starts_with(' ') {
            return None;
        }

        let tail_start = verb_end + 1;
        let tail = single_line(&line[tail_start..]);
        let (at, word) = PHRASES
            .iter()
            .filter_map(|(word, _)| tail.rfind(word).map(|at| (at, *word)))
            .max_by_key(|(at, _)| *at)?;

        let word_start = tail_start + at;
        Some(Captures::new(
            &line[start..word_start + word.len()],
            &[word],
        ))
    }
}

impl LinePattern for MovementPattern {
    fn captures(&self, line: &str) -> Option<Captures> {
        line.match_indices(MOVEMENT_PREFIX)
            .find_map(|(start, _)| Self::match_at(line, start))
    }

    fn describe(&self) -> String {
        r"Вы \S+ .*(север|юг|запад|восток|вверх|вниз)".to_string()
    }
}
