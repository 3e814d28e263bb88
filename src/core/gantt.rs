#![forbid(unsafe_code)]

use crate::core::dates;
use crate::task::model::TodoItem;

/// Chart-ready view of one task, recomputed from scratch on every render
/// pass. Offsets count days from the earliest start date in the collection;
/// durations are inclusive of both endpoints and never below one day, so a
/// bar stays visible even for same-day tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttRow {
    pub task_id: String,
    pub label: String,
    pub start_offset_days: u32,
    pub duration_days: u32,
    pub start_date: String,
    pub end_date: String,
    pub completed: bool,
}

/// Projects the collection into Gantt rows sorted ascending by start date.
/// The sort is stable, so tasks sharing a start date keep their insertion
/// order; the input collection is never mutated. Items whose stored dates
/// no longer parse are skipped.
#[must_use]
pub fn project(items: &[TodoItem]) -> Vec<GanttRow> {
    let mut dated: Vec<_> = items
        .iter()
        .filter_map(|item| item.date_range().map(|range| (range, item)))
        .collect();
    if dated.is_empty() {
        return Vec::new();
    }

    dated.sort_by_key(|((start, _), _)| *start);
    let ((anchor, _), _) = dated[0];

    dated
        .into_iter()
        .map(|((start, end), item)| {
            let offset = dates::days_between(anchor, start).max(0);
            let duration = (dates::days_between(start, end) + 1).max(1);
            GanttRow {
                task_id: item.id.clone(),
                label: item.task.clone(),
                start_offset_days: u32::try_from(offset).unwrap_or(u32::MAX),
                duration_days: u32::try_from(duration).unwrap_or(u32::MAX),
                start_date: item.start_date.clone(),
                end_date: item.end_date.clone(),
                completed: item.completed,
            }
        })
        .collect()
}

/// Days from the anchor to the end of the latest bar; the x-axis extent of
/// the chart.
#[must_use]
pub fn total_span_days(rows: &[GanttRow]) -> u32 {
    rows.iter()
        .map(|r| r.start_offset_days.saturating_add(r.duration_days))
        .max()
        .unwrap_or(0)
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
    fn empty_collection_projects_to_nothing() {
        assert!(project(&[]).is_empty());
        assert_eq!(total_span_days(&[]), 0);
    }

    #[test]
    fn same_day_task_gets_zero_offset_one_day() {
        let rows = project(&[item("a", "standup", "2024-01-01", "2024-01-01")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_offset_days, 0);
        assert_eq!(rows[0].duration_days, 1);
    }

    #[test]
    fn offsets_and_durations_are_relative_to_earliest_start() {
        let rows = project(&[
            item("a", "first", "2024-01-01", "2024-01-03"),
            item("b", "second", "2024-01-05", "2024-01-06"),
        ]);
        assert_eq!(rows[0].task_id, "a");
        assert_eq!(rows[0].start_offset_days, 0);
        assert_eq!(rows[0].duration_days, 3);
        assert_eq!(rows[1].task_id, "b");
        assert_eq!(rows[1].start_offset_days, 4);
        assert_eq!(rows[1].duration_days, 2);
        assert_eq!(total_span_days(&rows), 6);
    }

    #[test]
    fn sorts_by_start_date_keeping_ties_in_insertion_order() {
        let rows = project(&[
            item("late", "later", "2024-02-01", "2024-02-02"),
            item("t1", "tie one", "2024-01-10", "2024-01-11"),
            item("t2", "tie two", "2024-01-10", "2024-01-15"),
        ]);
        let ids: Vec<_> = rows.iter().map(|r| r.task_id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "late"]);
    }

    #[test]
    fn carries_original_dates_and_completion() {
        let mut done = item("a", "done", "2024-01-01", "2024-01-02");
        done.completed = true;
        let rows = project(&[done]);
        assert!(rows[0].completed);
        assert_eq!(rows[0].start_date, "2024-01-01");
        assert_eq!(rows[0].end_date, "2024-01-02");
        assert_eq!(rows[0].label, "done");
    }

    #[test]
    fn skips_items_with_unparseable_dates() {
        let rows = project(&[
            item("bad", "broken", "garbage", "2024-01-02"),
            item("ok", "fine", "2024-01-01", "2024-01-01"),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].task_id, "ok");
    }
}
