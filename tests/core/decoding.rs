//! Fragment decoding and the pending observation

use mudmap_core::PendingObservation;
use mudmap_core::decode::{
    DEFAULT_TITLE_REJECT, decode_exits, decode_movement, recognize_room, scan_exit_glyphs,
};
use mudmap_foundation::Direction::{Down, East, North, South, Up, West};
use mudmap_foundation::{ExitSet, RoomId};

// =============================================================================
// Exits
// =============================================================================

#[test]
fn exits_keep_first_seen_order() {
    let exits = decode_exits("СЮВv^");
    assert_eq!(exits.as_slice(), &[North, South, East, Down, Up]);
}

#[test]
fn bracketed_exits_count_as_exits() {
    let exits = decode_exits("(С)В(Ю)");
    assert_eq!(exits.as_slice(), &[North, East, South]);

    let glyphs = scan_exit_glyphs("(С)В(Ю)");
    let bracketed: Vec<_> = glyphs.iter().map(|glyph| glyph.bracketed).collect();
    assert_eq!(bracketed, vec![true, false, true]);
}

#[test]
fn case_variants_collapse() {
    assert_eq!(decode_exits("СсЗз").as_slice(), &[North, West]);
}

#[test]
fn unknown_glyphs_are_skipped() {
    assert_eq!(decode_exits("С?x!Ю").as_slice(), &[North, South]);
    assert!(decode_exits("()").is_empty());
}

// =============================================================================
// Movement and Titles
// =============================================================================

#[test]
fn movement_words() {
    assert_eq!(decode_movement("север"), Some(North));
    assert_eq!(decode_movement("ЮГ"), Some(South));
    assert_eq!(decode_movement("на север"), None);
}

#[test]
fn titles_are_trimmed() {
    let room = recognize_room("  Постоялый двор  ", "5001", &DEFAULT_TITLE_REJECT).unwrap();
    assert_eq!(room.name, "Постоялый двор");
    assert_eq!(room.id, RoomId::new("5001"));
}

#[test]
fn decoration_titles_are_rejected() {
    for title in [":-:", "|||", "--", ""] {
        assert!(recognize_room(title, "5001", &DEFAULT_TITLE_REJECT).is_none());
    }
    assert!(recognize_room("Двор", "", &DEFAULT_TITLE_REJECT).is_none());
}

#[test]
fn reject_set_is_configurable() {
    assert!(recognize_room("*Алтарь*", "6001", &['*']).is_none());
    assert!(recognize_room(":Алтарь", "6001", &['*']).is_some());
}

// =============================================================================
// Pending Observation
// =============================================================================

#[test]
fn empty_observation_is_incomplete() {
    let pending = PendingObservation::new();
    assert!(pending.is_empty());
    assert!(!pending.is_complete());
}

#[test]
fn partial_observations_are_incomplete() {
    let mut pending = PendingObservation::new();
    pending.record_room("Двор", RoomId::new("5001"));
    assert!(!pending.is_complete());

    let mut pending = PendingObservation::new();
    pending.record_exits(decode_exits("С"));
    assert!(!pending.is_complete());

    let mut pending = PendingObservation::new();
    pending.record_direction(North);
    pending.record_exits(decode_exits("С"));
    assert!(!pending.is_complete());
}

#[test]
fn empty_exits_never_complete() {
    let mut pending = PendingObservation::new();
    pending.record_room("Двор", RoomId::new("5001"));
    pending.record_exits(ExitSet::new());
    assert!(!pending.is_complete());

    pending.record_exits(decode_exits("Ю"));
    assert!(pending.is_complete());
}

#[test]
fn direction_clears_the_other_fragments() {
    let mut pending = PendingObservation::new();
    pending.record_room("Двор", RoomId::new("5001"));
    pending.record_exits(decode_exits("СЮ"));
    pending.record_direction(South);

    assert_eq!(pending.room_id(), None);
    assert_eq!(pending.room_name(), None);
    assert_eq!(pending.exits(), None);
    assert_eq!(pending.pending_direction(), Some(South));

    pending.reset();
    assert!(pending.is_empty());
}
