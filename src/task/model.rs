#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::core::dates;
use crate::error::ValidationError;

/// A single to-do entry. Field names follow the persisted wire format:
/// `[{"id", "task", "startDate", "endDate", "completed"}, ...]`.
///
/// Dates are inclusive calendar days stored as ISO `YYYY-MM-DD` strings and
/// parsed on demand. `id` and the date range are immutable after creation;
/// only `completed` changes over a task's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub task: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    #[must_use]
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Parsed `(start, end)` pair; `None` when either date string is not a
    /// valid calendar date.
    #[must_use]
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let start = dates::parse_iso(&self.start_date)?;
        let end = dates::parse_iso(&self.end_date)?;
        Some((start, end))
    }
}

/// Raw creation input, as collected by the new-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub task: String,
    pub start_date: String,
    pub end_date: String,
}

impl NewTask {
    /// Checks the creation invariants: non-blank description, both dates
    /// present and parseable, `start <= end`. Returns the parsed range so
    /// callers never re-parse validated input.
    pub fn validate(&self) -> Result<(Date, Date), ValidationError> {
        if self.task.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let start = parse_field("start", &self.start_date)?;
        let end = parse_field("end", &self.end_date)?;

        if start > end {
            return Err(ValidationError::InvertedRange {
                start: dates::format_iso(start),
                end: dates::format_iso(end),
            });
        }

        Ok((start, end))
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingDate { field });
    }
    dates::parse_iso(value).ok_or_else(|| ValidationError::InvalidDate {
        field,
        value: value.trim().to_owned(),
    })
}
