//! Property tests for decoding and commits

use proptest::prelude::*;

use mudmap_core::decode::decode_exits;
use mudmap_core::{Automapper, Commit};
use mudmap_foundation::{Direction, RoomId};

use crate::support::{RecordingHost, RecordingStore};

fn glyph() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['С', 'с', 'Ю', 'ю', 'З', 'з', 'В', 'в', '^', 'v', '(', ')'])
}

fn phrase() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["север", "юг", "запад", "восток", "вверх", "вниз"])
}

proptest! {
    #[test]
    fn decoded_exits_are_unique(raw in prop::collection::vec(glyph(), 0..20)) {
        let raw: String = raw.into_iter().collect();
        let exits = decode_exits(&raw);

        for (i, dir) in exits.iter().enumerate() {
            prop_assert!(!exits.as_slice()[..i].contains(&dir));
        }
        prop_assert!(exits.len() <= Direction::ALL.len());
    }

    #[test]
    fn decoded_exits_follow_glyph_order(raw in prop::collection::vec(glyph(), 0..20)) {
        let raw: String = raw.into_iter().collect();
        let expected: Vec<Direction> = raw
            .chars()
            .filter_map(Direction::from_glyph)
            .fold(Vec::new(), |mut seen, dir| {
                if !seen.contains(&dir) {
                    seen.push(dir);
                }
                seen
            });
        let decoded = decode_exits(&raw);
        prop_assert_eq!(decoded.as_slice(), expected.as_slice());
    }

    #[test]
    fn zone_never_panics(raw in "\\PC{0,24}") {
        let label = RoomId::new(raw).zone_label();
        prop_assert!(label.starts_with("zone_"));
    }

    #[test]
    fn every_commit_empties_the_buffer(
        moved in prop::option::of(phrase()),
        id in 1u32..100_000,
        glyphs in prop::collection::vec(glyph(), 1..8),
        current in prop::bool::ANY,
    ) {
        let mut mapper = Automapper::new();
        let mut store = RecordingStore::default();
        if current {
            store = store.with_current(&id.to_string(), "Двор");
        }
        let mut host = RecordingHost::default();

        if let Some(phrase) = moved {
            mapper.on_movement(Some(phrase), &mut host);
        }
        mapper.on_room(Some("Двор"), Some(&id.to_string()), &mut store, &mut host);
        let raw: String = glyphs.into_iter().collect();
        let commit = mapper.on_exits(Some(&raw), &mut store, &mut host);

        if decode_exits(&raw).is_empty() {
            prop_assert!(commit.is_none());
            prop_assert!(store.calls.is_empty());
        } else {
            prop_assert!(commit.is_some());
            prop_assert!(mapper.pending().is_empty());
            if moved.is_none() && current {
                prop_assert_eq!(commit, Some(Commit::AlreadyCurrent));
                prop_assert!(store.calls.is_empty());
            }
        }
    }
}
