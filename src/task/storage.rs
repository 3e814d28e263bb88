#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::task::model::TodoItem;

/// Persistence for the whole task collection: one JSON file holding an
/// ordered array of task records. The file is the single source of truth
/// between runs; there is no schema version and no partial update.
#[derive(Debug, Clone)]
pub struct TodoStorage {
    path: PathBuf,
}

impl TodoStorage {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted collection. Absent, unreadable, or unparseable
    /// data yields an empty collection; the failure is logged and never
    /// propagated. Records whose dates no longer parse are dropped
    /// individually so one damaged entry does not discard the rest.
    #[must_use]
    pub fn load(&self) -> Vec<TodoItem> {
        if !self.path.exists() {
            return Vec::new();
        }

        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("failed to read {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        let items: Vec<TodoItem> = match serde_json::from_slice(&data) {
            Ok(items) => items,
            Err(err) => {
                log::warn!(
                    "malformed task data in {}, starting empty: {err}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        items
            .into_iter()
            .filter(|item| {
                let ok = item.date_range().is_some();
                if !ok {
                    log::warn!(
                        "dropping task {} with unparseable dates '{}'..'{}'",
                        item.id,
                        item.start_date,
                        item.end_date
                    );
                }
                ok
            })
            .collect()
    }

    /// Serializes the full collection in insertion order, via temp file +
    /// rename; a crash mid-write leaves the previous blob intact.
    pub fn save(&self, items: &[TodoItem]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(items)?;
        std::fs::write(&tmp, &data).with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path).with_context(|| {
            format!("failed to rename {} -> {}", tmp.display(), self.path.display())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, task: &str, start: &str, end: &str) -> TodoItem {
        TodoItem {
            id: id.to_owned(),
            task: task.to_owned(),
            start_date: start.to_owned(),
            end_date: end.to_owned(),
            completed: false,
        }
    }

    #[test]
    fn round_trips_collection_order_and_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = TodoStorage::new(dir.path().join("todos.json"));

        let mut second = item("b", "second", "2024-01-05", "2024-01-06");
        second.completed = true;
        let items = vec![item("a", "first", "2024-01-01", "2024-01-03"), second];

        storage.save(&items).unwrap();
        assert_eq!(storage.load(), items);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = TodoStorage::new(dir.path().join("todos.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupted_blob_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todos.json");
        std::fs::write(&path, b"{not json at all").unwrap();

        let storage = TodoStorage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn records_with_broken_dates_are_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todos.json");
        std::fs::write(
            &path,
            r#"[
                {"id":"a","task":"fine","startDate":"2024-01-01","endDate":"2024-01-02","completed":false},
                {"id":"b","task":"broken","startDate":"later","endDate":"2024-01-02","completed":false}
            ]"#,
        )
        .unwrap();

        let loaded = TodoStorage::new(path).load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a");
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = TodoStorage::new(dir.path().join("nested").join("todos.json"));
        storage.save(&[item("a", "x", "2024-01-01", "2024-01-01")]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }
}
