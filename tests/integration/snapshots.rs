//! Saving and resuming a map

use mudmap::foundation::{ErrorKind, RoomId};
use mudmap::mapper::AutomapperConfig;
use mudmap::runtime::{ConsoleHost, MapSnapshot, Session, from_bytes, to_bytes};

fn session() -> Session<Vec<u8>> {
    Session::with_host(
        ConsoleHost::with_writer(Vec::new()),
        AutomapperConfig::default(),
    )
}

#[test]
fn session_resumes_where_it_stopped() {
    let path = std::env::temp_dir().join("mudmap_integration_resume.msgpack");
    let path_str = path.display().to_string();

    let mut first = session();
    first.feed_text("Постоялый двор [5001]\nВых:СЮ>\nВы пошли на север.\nПлощадь [5010]\nВых:Ю>\n");
    first.execute(&format!("#save {path_str}")).unwrap();

    let mut second = session();
    second.execute(&format!("#load {path_str}")).unwrap();
    assert_eq!(second.store().room_count(), 2);
    assert_eq!(second.store().current_id(), Some(&RoomId::new("5010")));

    // Walking on from the restored room links to it.
    second.feed_text("Вы пошли на юг.\nПостоялый двор [5001]\nВых:СЮ>\n");
    assert_eq!(second.store().current_id(), Some(&RoomId::new("5001")));
    assert_eq!(second.store().room_count(), 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn snapshot_bytes_round_trip() {
    let mut session = session();
    session.feed_text("Постоялый двор [5001]\nВых:СЮ>\n");
    session.execute("#vars automapper_debug=true").unwrap();

    let snapshot = session.snapshot();
    let restored = from_bytes(&to_bytes(&snapshot).unwrap()).unwrap();

    assert_eq!(restored, snapshot);
    assert_eq!(
        restored.variables.get("automapper_debug").map(String::as_str),
        Some("true")
    );
}

#[test]
fn empty_snapshot_is_valid() {
    let bytes = to_bytes(&MapSnapshot::default()).unwrap();
    let restored = from_bytes(&bytes).unwrap();
    assert_eq!(restored.store.room_count(), 0);
}

#[test]
fn loading_missing_snapshot_reports_io_error() {
    let mut session = session();
    let err = session
        .execute("#load /nonexistent/dir/map.msgpack")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
