use chrono::NaiveDate;
use tripdesk_core::{
    ActiveSection, Desk, EntryKind, FixedClock, SqliteStore, Theme, TopicStatus,
};

#[test]
fn tools_mount_independently_from_one_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
    let mut desk = Desk::open(&store, &clock).unwrap();
    assert_eq!(desk.active_section(), ActiveSection::Whiteboard);

    desk.switch_to(ActiveSection::Topics);
    {
        let mut topics = desk.topics().unwrap();
        let topic = topics.add("Segment trees").unwrap();
        topics.set_status(&topic.id, TopicStatus::Completed).unwrap();
    }

    desk.switch_to(ActiveSection::Journal);
    desk.journal().unwrap().add("Finished segment trees").unwrap();

    desk.switch_to(ActiveSection::Savings);
    desk.ledger()
        .unwrap()
        .add("25", "skipped takeout", EntryKind::Saved)
        .unwrap();

    assert_eq!(desk.topics().unwrap().stats().completion_percent(), 100.0);
    assert_eq!(desk.journal().unwrap().streaks().current, 1);
    assert_eq!(desk.ledger().unwrap().entries().len(), 1);
    assert!(desk.gallery().unwrap().drawings().is_empty());
}

#[test]
fn theme_toggle_persists() {
    let store = SqliteStore::open_in_memory().unwrap();
    let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
    {
        let mut desk = Desk::open(&store, &clock).unwrap();
        assert_eq!(desk.theme(), Theme::Light);
        assert_eq!(desk.toggle_theme().unwrap(), Theme::Dark);
    }
    let desk = Desk::open(&store, &clock).unwrap();
    assert_eq!(desk.theme(), Theme::Dark);
}
