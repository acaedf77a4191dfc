use chrono::{TimeZone, Utc};
use recordkeep_core::persist::json_snapshot::{load_snapshot, save_snapshot};
use recordkeep_core::{
    InventoryItem, InventoryLogError, InventoryLogService, LoadOutcome, PersistError, RepoError,
};

fn sample_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(
            1,
            "Laptop",
            5,
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        ),
        InventoryItem::new(
            2,
            "Monitor",
            12,
            Utc.with_ymd_and_hms(2026, 3, 2, 14, 5, 59).unwrap(),
        ),
    ]
}

#[test]
fn snapshot_round_trip_reproduces_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let items = sample_items();

    save_snapshot(&items, &path).unwrap();
    let loaded = load_snapshot::<InventoryItem>(&path).unwrap();

    assert_eq!(loaded, LoadOutcome::Loaded(items));
}

#[test]
fn snapshot_uses_expected_wire_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    save_snapshot(&sample_items()[..1], &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = &json[0];
    assert_eq!(first["Id"], 1);
    assert_eq!(first["Name"], "Laptop");
    assert_eq!(first["Quantity"], 5);
    assert_eq!(first["DateAdded"], "2026-03-01T09:30:00Z");
}

#[test]
fn missing_snapshot_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = load_snapshot::<InventoryItem>(dir.path().join("none.json")).unwrap();
    assert!(outcome.is_absent());
}

#[test]
fn non_numeric_quantity_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(
        &path,
        r#"[{"Id": 1, "Name": "Laptop", "Quantity": "five", "DateAdded": "2026-03-01T09:30:00Z"}]"#,
    )
    .unwrap();

    let err = load_snapshot::<InventoryItem>(&path).unwrap_err();
    assert!(matches!(err, PersistError::Format { .. }));
}

#[test]
fn first_session_starts_empty_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut log = InventoryLogService::open(&path).unwrap();
    assert!(!log.restored_from_disk());
    assert!(log.items().is_empty());

    let first = log.log_item("Keyboard", 30).unwrap();
    let second = log.log_item("Mouse", 45).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    log.save().unwrap();

    let reopened = InventoryLogService::open(&path).unwrap();
    assert!(reopened.restored_from_disk());
    assert_eq!(reopened.items(), log.items());
}

#[test]
fn ids_continue_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    save_snapshot(&sample_items(), &path).unwrap();

    let mut log = InventoryLogService::open(&path).unwrap();
    let added = log.log_item("Dock", 2).unwrap();
    assert_eq!(added.id, 3);
}

#[test]
fn log_rejects_negative_quantity() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = InventoryLogService::open(dir.path().join("inventory.json")).unwrap();

    let err = log.log_item("Broken", -2).unwrap_err();
    assert!(matches!(
        err,
        InventoryLogError::Repo(RepoError::InvalidValue { .. })
    ));
    assert!(log.items().is_empty());
}

#[test]
fn update_and_remove_go_through_repository() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    save_snapshot(&sample_items(), &path).unwrap();
    let mut log = InventoryLogService::open(&path).unwrap();

    log.update_quantity(1, 7).unwrap();
    assert_eq!(log.item(1).unwrap().quantity, 7);

    let err = log.update_quantity(1, -1).unwrap_err();
    assert!(matches!(err, InventoryLogError::Repo(RepoError::InvalidValue { .. })));
    assert_eq!(log.item(1).unwrap().quantity, 7);

    log.remove_item(2).unwrap();
    assert!(matches!(
        log.remove_item(2).unwrap_err(),
        InventoryLogError::Repo(RepoError::NotFound(_))
    ));
}

#[test]
fn duplicate_ids_in_snapshot_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let mut items = sample_items();
    items[1].id = 1;
    save_snapshot(&items, &path).unwrap();

    let err = InventoryLogService::open(&path).unwrap_err();
    assert!(matches!(
        err,
        InventoryLogError::Repo(RepoError::DuplicateKey(_))
    ));
}

#[test]
fn logging_after_max_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let mut items = sample_items();
    items[1].id = i64::MAX;
    save_snapshot(&items, &path).unwrap();

    let mut log = InventoryLogService::open(&path).unwrap();
    let err = log.log_item("Dock", 2).unwrap_err();
    assert!(matches!(
        err,
        InventoryLogError::Repo(RepoError::InvalidValue { field: "id", .. })
    ));
    assert_eq!(log.items(), items);
}
