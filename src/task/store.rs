#![forbid(unsafe_code)]

use crate::core::dates;
use crate::error::ValidationError;
use crate::task::model::{NewTask, TodoItem};
use crate::task::storage::TodoStorage;

/// Owner of the ordered task collection. All mutation goes through the
/// methods here; each successful mutation persists the full collection
/// fire-and-forget. A failed write is logged and the in-memory state is
/// kept, so memory and disk may diverge until the next successful save.
#[derive(Debug)]
pub struct TaskStore {
    storage: TodoStorage,
    items: Vec<TodoItem>,
}

impl TaskStore {
    /// Rehydrates the collection from storage. Missing or malformed data
    /// starts the store empty; see `TodoStorage::load`.
    #[must_use]
    pub fn open(storage: TodoStorage) -> Self {
        let items = storage.load();
        Self { storage, items }
    }

    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates and appends a new task (insertion order preserved,
    /// `completed = false`). On rejection the collection is untouched.
    pub fn add(&mut self, input: &NewTask) -> Result<TodoItem, ValidationError> {
        let (start, end) = input.validate()?;

        let item = TodoItem {
            id: TodoItem::new_id(),
            task: input.task.trim().to_owned(),
            start_date: dates::format_iso(start),
            end_date: dates::format_iso(end),
            completed: false,
        };
        self.items.push(item.clone());
        self.persist();

        Ok(item)
    }

    /// Flips `completed` on the matching task. Unknown ids are a no-op, not
    /// an error; returns whether a task matched.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.completed = !item.completed;
        self.persist();
        true
    }

    /// Removes the matching task, leaving all other tasks and their order
    /// untouched. Unknown ids are a no-op; returns whether a task matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(self.items()) {
            log::warn!(
                "failed to persist tasks to {}: {err:#}",
                self.storage.path().display()
            );
        } else {
            log::debug!(
                "persisted {} task(s) to {}",
                self.items.len(),
                self.storage.path().display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = TodoStorage::new(dir.path().join("todos.json"));
        (dir, TaskStore::open(storage))
    }

    fn input(task: &str, start: &str, end: &str) -> NewTask {
        NewTask {
            task: task.to_owned(),
            start_date: start.to_owned(),
            end_date: end.to_owned(),
        }
    }

    #[test]
    fn add_appends_pending_task_with_given_data() {
        let (_dir, mut store) = store();

        store.add(&input("first", "2024-01-01", "2024-01-03")).unwrap();
        let added = store
            .add(&input("  second  ", "2024-02-01", "2024-02-01"))
            .unwrap();

        assert_eq!(added.task, "second");
        assert_eq!(added.start_date, "2024-02-01");
        assert_eq!(added.end_date, "2024-02-01");
        assert!(!added.completed);

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].task, "first");
        assert_eq!(items[1].task, "second");
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn rejected_add_leaves_collection_unchanged() {
        let (_dir, mut store) = store();
        store.add(&input("keep", "2024-01-01", "2024-01-02")).unwrap();

        let err = store
            .add(&input("bad", "2024-01-05", "2024-01-02"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvertedRange { .. }));

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].task, "keep");
    }

    #[test]
    fn toggle_complete_is_an_involution() {
        let (_dir, mut store) = store();
        let id = store
            .add(&input("flip me", "2024-01-01", "2024-01-02"))
            .unwrap()
            .id
            .clone();

        assert!(store.toggle_complete(&id));
        assert!(store.items()[0].completed);
        assert!(store.toggle_complete(&id));
        assert!(!store.items()[0].completed);
    }

    #[test]
    fn toggle_of_unknown_id_is_a_noop() {
        let (_dir, mut store) = store();
        store.add(&input("only", "2024-01-01", "2024-01-02")).unwrap();

        assert!(!store.toggle_complete("no-such-id"));
        assert!(!store.items()[0].completed);
    }

    #[test]
    fn delete_removes_exactly_the_matching_task() {
        let (_dir, mut store) = store();
        store.add(&input("a", "2024-01-01", "2024-01-02")).unwrap();
        let id = store
            .add(&input("b", "2024-01-03", "2024-01-04"))
            .unwrap()
            .id
            .clone();
        store.add(&input("c", "2024-01-05", "2024-01-06")).unwrap();

        assert!(store.delete(&id));
        let tasks: Vec<_> = store.items().iter().map(|t| t.task.as_str()).collect();
        assert_eq!(tasks, ["a", "c"]);

        assert!(!store.delete("no-such-id"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todos.json");

        let mut store = TaskStore::open(TodoStorage::new(path.clone()));
        let id = store
            .add(&input("survive", "2024-01-01", "2024-01-02"))
            .unwrap()
            .id
            .clone();
        store.toggle_complete(&id);

        let reopened = TaskStore::open(TodoStorage::new(path));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.items()[0].id, id);
        assert!(reopened.items()[0].completed);
    }
}
