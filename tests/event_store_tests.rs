use eventbuddy::core::events::{Deletion, EventStore};
use eventbuddy::db::initialize::init_db;
use eventbuddy::db::kv::{SqliteStore, StorageScope};
use eventbuddy::errors::AppError;
use eventbuddy::models::seed::seed_events;
use eventbuddy::store::{DELETED_IDS_KEY, EVENTS_KEY, KeyValueStore, MemoryStore};
use rusqlite::Connection;

mod common;
use common::{at, draft, event};

fn store_with(seed: Vec<eventbuddy::models::event::Event>) -> EventStore<MemoryStore> {
    EventStore::new(MemoryStore::new(), seed)
}

#[test]
fn deleting_seed_event_hides_it_from_merged_list() {
    let mut store = store_with(vec![
        event(1, "2025-01-01", "Kickoff"),
        event(2, "2025-02-01", "Meetup"),
    ]);

    assert_eq!(store.delete(1).unwrap(), Deletion::SeedMarked);

    let ids: Vec<i64> = store.all_events().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(store.deleted_ids().unwrap().contains(&1));
    assert!(matches!(store.find(1), Err(AppError::EventNotFound(1))));
}

#[test]
fn editing_seed_event_shadows_it() {
    let mut store = store_with(vec![event(2, "2025-02-01", "Seed title")]);

    let d = draft("Edited title", "2025-02-01", 20);
    let updated = store.update(2, &d, at("2024-06-01 12:00")).unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.image, "/img.png");
    assert_eq!(updated.spots_left, 20);
    assert!(!updated.is_past);

    let all = store.all_events().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Edited title");
    assert_eq!(store.seed()[0].title, "Seed title");
}

#[test]
fn editing_local_event_replaces_it_in_place() {
    let mut store = store_with(vec![]);
    let created = store
        .create(&draft("Original", "2026-03-01", 10), at("2026-01-01 09:00"))
        .unwrap();

    store
        .update(created.id, &draft("Renamed", "2026-03-02", 12), at("2026-01-02 09:00"))
        .unwrap();

    let local = store.local_events().unwrap();
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].title, "Renamed");
    assert_eq!(local[0].capacity, 12);
}

#[test]
fn create_sets_spots_and_past_flag_from_draft() {
    let mut store = store_with(vec![]);

    let future = store
        .create(&draft("Future", "2026-12-01", 30), at("2026-10-15 08:00"))
        .unwrap();
    assert_eq!(future.spots_left, 30);
    assert!(!future.is_past);
    assert_eq!(future.tags, vec!["Tech", "Workshop"]);
    assert_eq!(future.image, "/placeholder.png");

    let past = store
        .create(&draft("Past", "2026-01-01", 30), at("2026-10-15 08:00"))
        .unwrap();
    assert!(past.is_past);
}

#[test]
fn same_day_counts_as_past_after_midnight() {
    let mut store = store_with(vec![]);
    let ev = store
        .create(&draft("Today", "2026-10-15", 5), at("2026-10-15 08:00"))
        .unwrap();
    assert!(ev.is_past);
}

#[test]
fn is_past_is_not_reevaluated_on_read() {
    let mut store = store_with(vec![]);
    let ev = store
        .create(&draft("Soon", "2026-10-20", 5), at("2026-10-15 08:00"))
        .unwrap();

    // Reading later never touches the stored flag.
    let read_back = store.find(ev.id).unwrap();
    assert!(!read_back.is_past);
}

#[test]
fn created_ids_are_unique_even_within_same_millisecond() {
    let mut store = store_with(vec![]);
    let now = at("2026-10-15 08:00");

    let a = store.create(&draft("A", "2026-12-01", 5), now).unwrap();
    let b = store.create(&draft("B", "2026-12-01", 5), now).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(store.all_events().unwrap().len(), 2);
}

#[test]
fn create_uses_configured_default_image() {
    let mut store = EventStore::new(MemoryStore::new(), vec![]).with_default_image("/default.jpg");
    let ev = store
        .create(&draft("Pic", "2026-12-01", 5), at("2026-10-15 08:00"))
        .unwrap();
    assert_eq!(ev.image, "/default.jpg");
}

#[test]
fn invalid_drafts_are_rejected() {
    let mut store = store_with(vec![]);
    let now = at("2026-10-15 08:00");

    assert!(matches!(
        store.create(&draft("Zero", "2026-12-01", 0), now),
        Err(AppError::InvalidCapacity(0))
    ));
    assert!(matches!(
        store.create(&draft("Bad date", "12/01/2026", 5), now),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        store.create(&draft("  ", "2026-12-01", 5), now),
        Err(AppError::MissingField("title"))
    ));
    assert!(store.local_events().unwrap().is_empty());
}

#[test]
fn deleting_local_event_removes_it() {
    let mut store = store_with(vec![event(1, "2025-01-01", "Seed")]);
    let ev = store
        .create(&draft("Local", "2026-12-01", 5), at("2026-10-15 08:00"))
        .unwrap();

    assert_eq!(store.delete(ev.id).unwrap(), Deletion::LocalRemoved);
    assert!(store.local_events().unwrap().is_empty());
    assert!(store.deleted_ids().unwrap().is_empty());
}

#[test]
fn deleting_edited_seed_event_drops_local_copy_too() {
    let mut store = store_with(vec![event(2, "2025-02-01", "Seed")]);
    store
        .update(2, &draft("Edited", "2025-02-01", 5), at("2024-01-01 00:00"))
        .unwrap();

    store.delete(2).unwrap();

    assert!(store.local_events().unwrap().is_empty());
    assert!(store.all_events().unwrap().is_empty());
}

#[test]
fn unknown_ids_are_not_found() {
    let mut store = store_with(vec![event(1, "2025-01-01", "Seed")]);
    let now = at("2026-10-15 08:00");

    assert!(matches!(store.delete(999), Err(AppError::EventNotFound(999))));
    assert!(matches!(
        store.update(999, &draft("X", "2026-12-01", 5), now),
        Err(AppError::EventNotFound(999))
    ));

    store.delete(1).unwrap();
    assert!(matches!(store.delete(1), Err(AppError::EventNotFound(1))));
}

#[test]
fn malformed_storage_fails_open() {
    let mut kv = MemoryStore::new();
    kv.set(EVENTS_KEY, "{not json").unwrap();
    kv.set(DELETED_IDS_KEY, "\"oops\"").unwrap();

    let store = EventStore::new(kv, vec![event(1, "2025-01-01", "Seed")]);

    assert!(store.local_events().unwrap().is_empty());
    assert!(store.deleted_ids().unwrap().is_empty());
    assert_eq!(store.all_events().unwrap().len(), 1);
}

#[test]
fn stored_records_use_camel_case_keys() {
    let mut kv = MemoryStore::new();
    {
        let mut store = EventStore::new(&mut kv, vec![event(1, "2025-01-01", "Seed")]);
        store
            .create(&draft("Local", "2026-12-01", 5), at("2026-10-15 08:00"))
            .unwrap();
        store.delete(1).unwrap();
    }

    let raw = kv.get(EVENTS_KEY).unwrap().expect("events stored");
    assert!(raw.contains("\"spotsLeft\":5"));
    assert!(raw.contains("\"isPast\":false"));
    assert_eq!(kv.get(DELETED_IDS_KEY).unwrap().as_deref(), Some("[1]"));
}

#[test]
fn sqlite_store_persists_across_store_instances() {
    let conn = Connection::open_in_memory().unwrap();
    init_db(&conn).unwrap();

    {
        let mut store = EventStore::new(SqliteStore::new(&conn, StorageScope::Local), seed_events());
        store.delete(1).unwrap();
        store
            .create(&draft("Local", "2027-06-01", 5), at("2026-10-15 08:00"))
            .unwrap();
    }

    let store = EventStore::new(SqliteStore::new(&conn, StorageScope::Local), seed_events());
    let all = store.all_events().unwrap();

    assert!(all.iter().all(|e| e.id != 1));
    assert!(all.iter().any(|e| e.title == "Local"));
    assert_eq!(all.len(), seed_events().len());
}

#[test]
fn sqlite_scopes_do_not_share_keys() {
    let conn = Connection::open_in_memory().unwrap();
    init_db(&conn).unwrap();

    let mut local = SqliteStore::new(&conn, StorageScope::Local);
    let session = SqliteStore::new(&conn, StorageScope::Session);

    local.set("user", "local-value").unwrap();
    assert_eq!(session.get("user").unwrap(), None);

    local.set("user", "overwritten").unwrap();
    assert_eq!(local.get("user").unwrap().as_deref(), Some("overwritten"));

    local.remove("user").unwrap();
    assert_eq!(local.get("user").unwrap(), None);
}
