#![forbid(unsafe_code)]

use crate::core::dates;
use crate::task::model::TodoItem;

/// Display-ready view of one task for the list tab. Same order as the
/// stored collection, no filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub task: String,
    pub start_display: String,
    pub end_display: String,
    pub completed: bool,
}

#[must_use]
pub fn project(items: &[TodoItem]) -> Vec<ListRow> {
    items
        .iter()
        .map(|item| ListRow {
            id: item.id.clone(),
            task: item.task.clone(),
            start_display: display_date(&item.start_date),
            end_display: display_date(&item.end_date),
            completed: item.completed,
        })
        .collect()
}

fn display_date(value: &str) -> String {
    dates::parse_iso(value).map_or_else(|| "-".to_owned(), dates::format_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, task: &str, start: &str, end: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: id.to_owned(),
            task: task.to_owned(),
            start_date: start.to_owned(),
            end_date: end.to_owned(),
            completed,
        }
    }

    #[test]
    fn keeps_insertion_order_and_formats_dates() {
        let rows = project(&[
            item("b", "second added", "2024-03-05", "2024-03-07", true),
            item("a", "first by date", "2024-01-01", "2024-01-02", false),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[0].start_display, "Mar 5, 2024");
        assert_eq!(rows[0].end_display, "Mar 7, 2024");
        assert!(rows[0].completed);
        assert_eq!(rows[1].id, "a");
        assert!(!rows[1].completed);
    }

    #[test]
    fn unparseable_dates_render_as_placeholder() {
        let rows = project(&[item("x", "odd", "junk", "2024-01-02", false)]);
        assert_eq!(rows[0].start_display, "-");
        assert_eq!(rows[0].end_display, "Jan 2, 2024");
    }
}
