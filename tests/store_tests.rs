mod common;
use babybirthdays::db::log::load_log;
use babybirthdays::db::migrate::{DATABASE_VERSION, schema_version};
use babybirthdays::errors::AppError;
use babybirthdays::{BirthdayRecord, BirthdayStore, SortOrder};
use common::{ms, setup_test_db};

#[test]
fn test_create_and_fetch_roundtrip() {
    let store = BirthdayStore::open_in_memory().unwrap();

    let id = store.create("Alice", ms(2020, 1, 1)).unwrap();
    assert!(id > 0);

    let loaded = store.fetch_one(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        BirthdayRecord {
            id,
            name: "Alice".into(),
            birthdate: ms(2020, 1, 1),
        }
    );
}

#[test]
fn test_empty_name_is_accepted() {
    let store = BirthdayStore::open_in_memory().unwrap();
    let id = store.create("", ms(2021, 7, 4)).unwrap();
    assert_eq!(store.fetch_one(id).unwrap().unwrap().name, "");
}

#[test]
fn test_update_reflects_new_values() {
    let store = BirthdayStore::open_in_memory().unwrap();
    let id = store.create("Alice", ms(2020, 1, 1)).unwrap();

    assert!(store.update(id, "Alicia", ms(2020, 2, 2)).unwrap());

    let loaded = store.fetch_one(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Alicia");
    assert_eq!(loaded.birthdate, ms(2020, 2, 2));
}

#[test]
fn test_delete_then_fetch_is_absent() {
    let store = BirthdayStore::open_in_memory().unwrap();
    let id = store.create("Alice", ms(2020, 1, 1)).unwrap();

    assert!(store.delete(id).unwrap());
    assert!(store.fetch_one(id).unwrap().is_none());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_unknown_id_reports_false() {
    let store = BirthdayStore::open_in_memory().unwrap();
    store.create("Alice", ms(2020, 1, 1)).unwrap();

    assert!(!store.update(999, "Nobody", ms(2020, 1, 1)).unwrap());
    assert!(!store.delete(999).unwrap());
    assert!(store.fetch_one(999).unwrap().is_none());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = BirthdayStore::open_in_memory().unwrap();
    let first = store.create("Alice", ms(2020, 1, 1)).unwrap();
    let second = store.create("Bruno", ms(2019, 1, 15)).unwrap();
    store.delete(second).unwrap();

    let third = store.create("Carla", ms(2021, 5, 5)).unwrap();
    assert!(third > second);
    assert!(second > first);
}

#[test]
fn test_fetch_all_orders() {
    let store = BirthdayStore::open_in_memory().unwrap();
    store.create("carla", ms(2021, 5, 5)).unwrap();
    store.create("Alice", ms(2020, 1, 1)).unwrap();
    store.create("Bruno", ms(2019, 1, 15)).unwrap();

    let names = |order| -> Vec<String> {
        store
            .fetch_all(order)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect()
    };

    assert_eq!(names(SortOrder::Id), ["carla", "Alice", "Bruno"]);
    assert_eq!(names(SortOrder::Name), ["Alice", "Bruno", "carla"]);
    assert_eq!(names(SortOrder::Birthdate), ["Bruno", "Alice", "carla"]);
}

#[test]
fn test_fetch_all_empty() {
    let store = BirthdayStore::open_in_memory().unwrap();
    assert!(store.fetch_all(SortOrder::Id).unwrap().is_empty());
}

#[test]
fn test_reopen_same_version_keeps_data() {
    let db_path = setup_test_db("store_reopen");

    {
        let store = BirthdayStore::open(&db_path).unwrap();
        store.create("Alice", ms(2020, 1, 1)).unwrap();
        assert_eq!(schema_version(store.conn()).unwrap(), DATABASE_VERSION);
    }

    let store = BirthdayStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_version_change_drops_and_recreates_table() {
    let db_path = setup_test_db("store_version_bump");

    {
        let store = BirthdayStore::open(&db_path).unwrap();
        store.create("Alice", ms(2020, 1, 1)).unwrap();
        store
            .conn()
            .execute_batch("PRAGMA user_version = 1;")
            .unwrap();
    }

    let store = BirthdayStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(schema_version(store.conn()).unwrap(), DATABASE_VERSION);

    let log = load_log(store.conn()).unwrap();
    assert!(
        log.iter()
            .any(|e| e.operation == "migration_applied" && e.message.contains("version 1"))
    );

    // the recreated table is usable
    let id = store.create("Bruno", ms(2019, 1, 15)).unwrap();
    assert_eq!(store.fetch_one(id).unwrap().unwrap().name, "Bruno");
}

#[test]
fn test_newer_schema_version_is_rejected() {
    let db_path = setup_test_db("store_newer_version");

    {
        let store = BirthdayStore::open(&db_path).unwrap();
        store
            .conn()
            .execute_batch(&format!("PRAGMA user_version = {};", DATABASE_VERSION + 1))
            .unwrap();
    }

    match BirthdayStore::open(&db_path) {
        Err(AppError::Migration(msg)) => assert!(msg.contains("newer")),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected a migration error"),
    }
}

#[test]
fn test_open_fails_on_unwritable_path() {
    let result = BirthdayStore::open("/nonexistent-dir/for/sure/birthdays.sqlite");
    assert!(matches!(result, Err(AppError::Db(_))));
}
