use tempfile::TempDir;

use bookhaven::{
    book::{BookDraft, BookPatch},
    core::store::CatalogStore,
    persist::{OpSink, sqlite::SqliteOpSink},
};

fn draft(title: &str, genre: &str, stock: u32) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: "Author".to_string(),
        genre: genre.to_string(),
        price_cents: 1099,
        description: String::new(),
        stock,
        cover_url: String::new(),
        rating_tenths: Some(40),
        isbn: String::new(),
    }
}

#[test]
fn sqlite_replay_round_trips_catalog_state() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("ops.db");

    let mut store = CatalogStore::new();
    let mut sink = SqliteOpSink::open(&db_path).expect("open sqlite");

    let (id1, _) = store.insert(draft("The Hobbit", "Fantasy", 12)).expect("insert1");
    let (id2, _) = store.insert(draft("Dune", "Sci-Fi", 7)).expect("insert2");
    store.insert(draft("Emma", "Romance", 4)).expect("insert3");
    store
        .patch(
            &id1,
            BookPatch {
                genre: Some("Epic Fantasy".to_string()),
                stock: Some(11),
                ..BookPatch::default()
            },
        )
        .expect("patch");
    store.remove(&id2).expect("remove");

    let ops = store.drain_pending_ops();
    sink.append_ops(&ops).expect("append");

    drop(sink);

    let sink2 = SqliteOpSink::open(&db_path).expect("reopen");
    let replayed = sink2.load_store().expect("replay");

    assert_eq!(replayed.export_snapshot(), store.export_snapshot());
    assert_eq!(replayed.ordered_ids(), ["1", "3"]);
    assert_eq!(replayed.by_genre("Epic Fantasy").len(), 1);
    assert!(replayed.by_genre("Fantasy").is_empty());
    assert!(replayed.by_genre("Sci-Fi").is_empty());
}

#[test]
fn snapshot_and_compaction_preserve_replay() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("snap.db");

    let mut store = CatalogStore::new();
    let mut sink = SqliteOpSink::open(&db_path).expect("open sqlite");

    for i in 0..10u32 {
        store
            .insert(draft(&format!("Volume {i}"), "Series", i))
            .expect("insert");
    }
    let first = store.ordered_ids()[0].clone();
    store
        .patch(
            &first,
            BookPatch {
                stock: Some(100),
                ..BookPatch::default()
            },
        )
        .expect("patch");
    store.remove(&"2".to_string()).expect("remove");

    sink.append_ops(&store.drain_pending_ops()).expect("append");

    let snapshot = store.export_snapshot();
    let last_seq = store.latest_op_seq();
    sink.write_snapshot(&snapshot, last_seq).expect("snapshot");
    let removed = sink.compact_through(last_seq).expect("compact");
    assert_eq!(removed, 12);

    drop(sink);

    let reopened = SqliteOpSink::open(&db_path).expect("reopen");
    let replayed = reopened.load_store().expect("replay");
    assert_eq!(replayed.export_snapshot(), snapshot);
}

#[test]
fn tail_events_after_a_snapshot_merge_on_load() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("tail.db");

    let mut store = CatalogStore::new();
    let mut sink = SqliteOpSink::open(&db_path).expect("open sqlite");

    store.insert(draft("One", "Genre", 1)).expect("insert");
    store.insert(draft("Two", "Genre", 2)).expect("insert");
    sink.append_ops(&store.drain_pending_ops()).expect("append");
    sink.write_snapshot(&store.export_snapshot(), store.latest_op_seq())
        .expect("snapshot");
    sink.compact_through(store.latest_op_seq()).expect("compact");

    store.insert(draft("Three", "Genre", 3)).expect("insert");
    sink.append_ops(&store.drain_pending_ops()).expect("append");

    drop(sink);

    let reopened = SqliteOpSink::open(&db_path).expect("reopen");
    let replayed = reopened.load_store().expect("replay");
    assert_eq!(replayed.export_snapshot(), store.export_snapshot());
    assert_eq!(replayed.ordered_ids(), ["1", "2", "3"]);
}

#[test]
fn in_memory_sink_appends_and_reports_sequences() {
    let mut store = CatalogStore::new();
    let mut sink = SqliteOpSink::open_in_memory().expect("open");

    store.insert(draft("A", "G", 1)).expect("insert");
    store.insert(draft("B", "G", 2)).expect("insert");
    let last = sink.append_ops(&store.drain_pending_ops()).expect("append");

    assert_eq!(last, 2);
    assert_eq!(sink.latest_seq().expect("latest"), 2);
    assert_eq!(sink.load_events_after(1).expect("tail").len(), 1);
    assert_eq!(sink.load_events_after(0).expect("all").len(), 2);

    let replayed = sink.load_store().expect("replay");
    assert_eq!(replayed.export_snapshot(), store.export_snapshot());
}
