mod common;
use common::{at, day, default_settings, fresh_record};
use rworklog::core::store::{MemStore, RecordStore};
use rworklog::db::SqliteStore;
use rworklog::models::work_status::WorkStatus;

/// Same contract, whichever store is behind it.
fn exercise_store<S: RecordStore>(store: &mut S) {
    let mut a = fresh_record("2025-06-02");
    a.clock_in = Some(at("2025-06-02", "09:00"));
    a.status = WorkStatus::Working;
    let b = fresh_record("2025-06-05");
    let c = fresh_record("2025-07-01");

    store.save(&a).unwrap();
    store.save(&b).unwrap();
    store.save(&c).unwrap();

    let loaded = store.get(&a.id).unwrap().expect("saved record");
    assert_eq!(loaded, a);
    assert!(store.get("missing").unwrap().is_none());

    let by_date = store.get_by_date(day("2025-06-02")).unwrap();
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].id, a.id);

    let all = store.all().unwrap();
    let dates: Vec<String> = all.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2025-07-01", "2025-06-05", "2025-06-02"]);

    let june = store.range(day("2025-06-01"), day("2025-06-30")).unwrap();
    let dates: Vec<String> = june.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2025-06-02", "2025-06-05"]);

    // last write wins
    let mut a2 = a.clone();
    a2.clock_out = Some(at("2025-06-02", "17:00"));
    a2.status = WorkStatus::Finished;
    a2.total_work_minutes = 480;
    a2.earnings = 24000;
    store.save(&a2).unwrap();
    assert_eq!(store.get(&a.id).unwrap(), Some(a2));
    assert_eq!(store.all().unwrap().len(), 3);

    assert!(store.delete(&b.id).unwrap());
    assert!(!store.delete(&b.id).unwrap());
    assert_eq!(store.all().unwrap().len(), 2);

    let mut s = default_settings();
    s.hourly_rate = 2500.0;
    s.overtime_rate = 0.0;
    s.target_minutes_per_day = 420;
    store.save_settings(&s).unwrap();
    assert_eq!(store.get_settings().unwrap(), s);

    store.audit("edit", "2025-06-02", "test line").unwrap();
}

#[test]
fn mem_store_contract() {
    let mut store = MemStore::new();
    exercise_store(&mut store);
    assert_eq!(store.len(), 2);
    assert_eq!(store.audit_entries().len(), 1);
    assert_eq!(store.audit_entries()[0].operation, "edit");
}

#[test]
fn sqlite_store_contract() {
    let mut store = SqliteStore::in_memory().expect("in-memory db");
    exercise_store(&mut store);

    let rows = rworklog::db::log::load_log(store.conn()).unwrap();
    assert!(rows.iter().any(|r| r.operation == "edit" && r.message == "test line"));
}

#[test]
fn sqlite_store_seeds_default_settings() {
    let store = SqliteStore::in_memory().unwrap();
    let s = store.get_settings().unwrap();
    assert_eq!(s.hourly_rate, 3000.0);
    assert_eq!(s.overtime_rate, 3750.0);
    assert_eq!(s.target_minutes_per_day, 480);
}

#[test]
fn migrations_are_recorded_once() {
    let store = SqliteStore::in_memory().unwrap();
    rworklog::db::initialize::init_db(store.conn()).unwrap();

    let applied: Vec<String> = rworklog::db::log::load_log(store.conn())
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .map(|r| r.target)
        .collect();
    assert_eq!(
        applied,
        vec![
            "20251016_0001_work_records_date_index",
            "20251016_0002_seed_default_settings"
        ]
    );
}

#[test]
fn sqlite_store_persists_to_file() {
    let path = common::setup_test_db("store_persists");
    let rec = fresh_record("2025-06-02");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.save(&rec).unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get(&rec.id).unwrap(), Some(rec));
}
