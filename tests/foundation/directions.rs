//! Integration tests for directions and exit sets

use mudmap_foundation::direction::{GLYPHS, PHRASES};
use mudmap_foundation::{Direction, ExitSet};

// =============================================================================
// Lookup Tables
// =============================================================================

#[test]
fn every_direction_has_a_phrase() {
    for dir in Direction::ALL {
        assert!(PHRASES.iter().any(|(_, d)| *d == dir), "{dir} has no phrase");
    }
}

#[test]
fn horizontal_directions_have_both_glyph_cases() {
    for (upper, lower, dir) in [
        ('С', 'с', Direction::North),
        ('Ю', 'ю', Direction::South),
        ('З', 'з', Direction::West),
        ('В', 'в', Direction::East),
    ] {
        assert_eq!(Direction::from_glyph(upper), Some(dir));
        assert_eq!(Direction::from_glyph(lower), Some(dir));
    }
    assert_eq!(GLYPHS.len(), 10);
}

#[test]
fn vertical_glyphs() {
    assert_eq!(Direction::from_glyph('^'), Some(Direction::Up));
    assert_eq!(Direction::from_glyph('v'), Some(Direction::Down));
    assert_eq!(Direction::from_glyph('V'), None);
    assert_eq!(Direction::from_glyph('('), None);
}

#[test]
fn phrases_are_case_insensitive() {
    assert_eq!(Direction::from_phrase("СЕВЕР"), Some(Direction::North));
    assert_eq!(Direction::from_phrase("Вниз"), Some(Direction::Down));
    assert_eq!(Direction::from_phrase("северо-запад"), None);
}

#[test]
fn canonical_names_round_trip() {
    for dir in Direction::ALL {
        assert_eq!(Direction::from_name(dir.as_str()), Some(dir));
        assert_eq!(dir.to_string(), dir.as_str());
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

// =============================================================================
// Exit Sets
// =============================================================================

#[test]
fn exit_set_keeps_first_seen_order() {
    let exits: ExitSet = [
        Direction::Up,
        Direction::North,
        Direction::Up,
        Direction::South,
    ]
    .into_iter()
    .collect();

    assert_eq!(
        exits.as_slice(),
        &[Direction::Up, Direction::North, Direction::South]
    );
    assert_eq!(exits.to_string(), "up,north,south");
}

#[test]
fn exit_set_extend_skips_duplicates() {
    let mut exits = ExitSet::new();
    exits.extend([Direction::East, Direction::West]);
    exits.extend([Direction::West, Direction::Down]);
    assert_eq!(exits.len(), 3);
    assert!(exits.contains(Direction::Down));
}
