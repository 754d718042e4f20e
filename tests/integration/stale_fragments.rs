//! Fragments have no expiry: whatever is buffered is used by the next commit.

use mudmap::foundation::Direction::{North, South};
use mudmap::foundation::RoomId;
use mudmap::mapper::AutomapperConfig;
use mudmap::runtime::{ConsoleHost, Session};

fn session() -> Session<Vec<u8>> {
    Session::with_host(
        ConsoleHost::with_writer(Vec::new()),
        AutomapperConfig::default(),
    )
}

#[test]
fn stale_direction_is_applied_to_a_later_room() {
    let mut session = session();
    session.feed_text("Постоялый двор [5001]\nВых:СЮ>\n");

    // The move fails silently: no title or prompt follows it.
    session.feed_line("Вы пошли на север.");
    session.feed_line("Вы не можете идти туда.");

    // Much later a room shows up through a teleport.
    session.feed_text("Храм [6001]\nВых:Ю>\n");

    let inn = session.store().room(&RoomId::new("5001")).unwrap();
    assert_eq!(inn.exit(North), Some(Some(&RoomId::new("6001"))));
    let temple = session.store().room(&RoomId::new("6001")).unwrap();
    assert_eq!(temple.exit(South), Some(Some(&RoomId::new("5001"))));
}

#[test]
fn stale_title_pairs_with_a_later_prompt() {
    let mut session = session();
    session.feed_line("Постоялый двор [5001]");
    session.feed_text("Много строк текста.\nЕще строка.\n");
    session.feed_line("32H 120M Вых:С>");

    assert!(session.store().room(&RoomId::new("5001")).is_some());
    assert!(session.mapper().pending().is_empty());
}

#[test]
fn later_title_overwrites_earlier_one() {
    let mut session = session();
    session.feed_line("Постоялый двор [5001]");
    session.feed_line("Торговая площадь [5010]");
    session.feed_line("Вых:Ю>");

    assert!(session.store().room(&RoomId::new("5001")).is_none());
    assert_eq!(session.store().current_id(), Some(&RoomId::new("5010")));
}
