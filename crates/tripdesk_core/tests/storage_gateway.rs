use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tripdesk_core::repo::{
    DRAWINGS_KEY, JOURNAL_ENTRIES_KEY, SAVINGS_ENTRIES_KEY, SAVINGS_GOAL_KEY, THEME_KEY,
    TOPICS_KEY,
};
use tripdesk_core::{
    CanvasSnapshot, DrawingRecord, FixedClock, GalleryService, JournalRecord, KeyValueStore,
    KvRecordRepository, KvSingletonRepository, MemoryStore, RecordRepository, SavingsGoal,
    SingletonRepository, SqliteStore, TopicRecord, TopicService,
};

const BROWSER_DRAWINGS: &str = r#"[{"id":"1717000000000","name":"Drawing 1","dataUrl":"data:image/png;base64,iVBORw0KGgo=","timestamp":"5/29/2024, 3:04:05 PM"}]"#;

#[test]
fn storage_keys_match_existing_layout() {
    assert_eq!(TOPICS_KEY, "dsa-topics");
    assert_eq!(JOURNAL_ENTRIES_KEY, "journal-entries");
    assert_eq!(SAVINGS_ENTRIES_KEY, "savings-entries");
    assert_eq!(SAVINGS_GOAL_KEY, "savings-goal");
    assert_eq!(DRAWINGS_KEY, "drawings");
    assert_eq!(THEME_KEY, "theme");
}

#[test]
fn sqlite_store_get_set_remove() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.remove("k").unwrap();
}

#[test]
fn collections_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("desk.sqlite3");
    let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());

    let added = {
        let store = SqliteStore::open(&path).unwrap();
        let mut topics = TopicService::open(KvRecordRepository::new(&store), &clock).unwrap();
        topics.add("Tries").unwrap()
    };

    let store = SqliteStore::open(&path).unwrap();
    let repo = KvRecordRepository::<_, TopicRecord>::new(&store);
    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded, vec![added]);
}

#[test]
fn reads_records_written_by_the_browser_app() {
    let store = MemoryStore::new();
    store
        .set(
            JOURNAL_ENTRIES_KEY,
            r#"[{"id":"1717000000000","date":"2024-05-29","content":"Binary search drills"}]"#,
        )
        .unwrap();
    store
        .set(SAVINGS_GOAL_KEY, r#"{"monthlyTarget":150.5,"currentMonth":"2024-05"}"#)
        .unwrap();

    let journal = KvRecordRepository::<_, JournalRecord>::new(&store)
        .load_all()
        .unwrap();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].id, "1717000000000");
    assert_eq!(journal[0].date, NaiveDate::from_ymd_opt(2024, 5, 29).unwrap());

    let goal = KvSingletonRepository::<_, SavingsGoal>::new(&store)
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(goal.month, "2024-05");
    assert_eq!(goal.monthly_target, Decimal::from_str("150.5").unwrap());

    store.set(DRAWINGS_KEY, BROWSER_DRAWINGS).unwrap();
    let drawings = KvRecordRepository::<_, DrawingRecord>::new(&store)
        .load_all()
        .unwrap();
    assert_eq!(drawings.len(), 1);
    assert_eq!(drawings[0].name, "Drawing 1");
    assert_eq!(drawings[0].timestamp, "5/29/2024, 3:04:05 PM");
}

#[test]
fn saving_a_drawing_keeps_browser_gallery_entries() {
    let store = MemoryStore::new();
    store.set(DRAWINGS_KEY, BROWSER_DRAWINGS).unwrap();
    let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    let mut gallery = GalleryService::open(KvRecordRepository::new(&store), &clock).unwrap();
    assert_eq!(gallery.drawings().len(), 1);
    let saved = gallery
        .save(CanvasSnapshot::from_data_url("data:image/png;base64,AA=="))
        .unwrap();
    assert_eq!(saved.name, "Drawing 2");
    assert!(!saved.timestamp.is_empty());

    let reloaded = KvRecordRepository::<_, DrawingRecord>::new(&store)
        .load_all()
        .unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].id, "1717000000000");
    assert_eq!(reloaded[0].timestamp, "5/29/2024, 3:04:05 PM");
    assert_eq!(reloaded[1], saved);
}

#[test]
fn corrupt_collections_degrade_to_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set(TOPICS_KEY, "not json at all").unwrap();
    store.set(SAVINGS_GOAL_KEY, "[1, 2").unwrap();

    let topics = KvRecordRepository::<_, TopicRecord>::new(&store)
        .load_all()
        .unwrap();
    assert!(topics.is_empty());
    let goal = KvSingletonRepository::<_, SavingsGoal>::new(&store)
        .load()
        .unwrap();
    assert!(goal.is_none());
}

#[test]
fn save_all_writes_the_full_collection() {
    let store = MemoryStore::new();
    let repo = KvRecordRepository::<_, JournalRecord>::new(&store);
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    repo.save_all(&[JournalRecord::new("a", day), JournalRecord::new("b", day)])
        .unwrap();
    repo.save_all(&[JournalRecord::new("c", day)]).unwrap();

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].content, "c");
    assert_eq!(store.keys(), vec![JOURNAL_ENTRIES_KEY.to_string()]);
}
