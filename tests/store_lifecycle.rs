use tasktui::core::gantt;
use tasktui::task::model::NewTask;
use tasktui::task::storage::TodoStorage;
use tasktui::task::store::TaskStore;

fn input(task: &str, start: &str, end: &str) -> NewTask {
    NewTask {
        task: task.to_owned(),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
    }
}

#[test]
fn full_lifecycle_survives_reopen() {
    let td = tempfile::tempdir().expect("tempdir");
    let blob = td.path().join("todos.json");

    let mut store = TaskStore::open(TodoStorage::new(blob.clone()));
    assert!(store.is_empty());

    let a = store
        .add(&input("design homepage", "2024-01-01", "2024-01-03"))
        .expect("add a");
    let b = store
        .add(&input("ship homepage", "2024-01-05", "2024-01-06"))
        .expect("add b");
    store
        .add(&input("retro", "2024-01-07", "2024-01-07"))
        .expect("add c");

    assert!(store.toggle_complete(&a.id));
    assert!(store.delete(&b.id));

    // A fresh store over the same blob sees the persisted state.
    let store = TaskStore::open(TodoStorage::new(blob));
    let tasks: Vec<_> = store.items().iter().map(|t| t.task.as_str()).collect();
    assert_eq!(tasks, ["design homepage", "retro"]);
    assert!(store.items()[0].completed);
    assert!(!store.items()[1].completed);

    // The chart projection works off the reloaded collection unchanged.
    let rows = gantt::project(store.items());
    assert_eq!(rows[0].start_offset_days, 0);
    assert_eq!(rows[0].duration_days, 3);
    assert_eq!(rows[1].start_offset_days, 6);
    assert_eq!(rows[1].duration_days, 1);
}

#[test]
fn corrupted_blob_recovers_to_empty_and_stays_usable() {
    let td = tempfile::tempdir().expect("tempdir");
    let blob = td.path().join("todos.json");
    std::fs::write(&blob, b"\x00\x01 definitely not json").expect("write garbage");

    let mut store = TaskStore::open(TodoStorage::new(blob.clone()));
    assert!(store.is_empty());

    // The next mutation overwrites the damaged blob with valid data.
    store
        .add(&input("fresh start", "2024-02-01", "2024-02-02"))
        .expect("add");

    let reopened = TaskStore::open(TodoStorage::new(blob));
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.items()[0].task, "fresh start");
}
