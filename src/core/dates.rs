#![forbid(unsafe_code)]

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Wire format for task dates, day granularity only.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Human-readable form used by the list projection, e.g. `Jan 2, 2024`.
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

#[must_use]
pub fn parse_iso(value: &str) -> Option<Date> {
    Date::parse(value.trim(), ISO_DATE).ok()
}

#[must_use]
pub fn format_iso(date: Date) -> String {
    date.format(ISO_DATE)
        .unwrap_or_else(|_| "invalid".to_owned())
}

#[must_use]
pub fn format_display(date: Date) -> String {
    date.format(DISPLAY_DATE)
        .unwrap_or_else(|_| "invalid".to_owned())
}

/// Whole days from `from` to `to`; negative when `to` precedes `from`.
#[must_use]
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_iso("2024-01-02").unwrap();
        assert_eq!(format_iso(d), "2024-01-02");

        assert!(parse_iso(" 2024-12-31 ").is_some());
        assert!(parse_iso("").is_none());
        assert!(parse_iso("01/02/2024").is_none());
        assert!(parse_iso("2024-13-01").is_none());
        assert!(parse_iso("2024-02-30").is_none());
    }

    #[test]
    fn formats_for_display() {
        let d = parse_iso("2024-01-02").unwrap();
        assert_eq!(format_display(d), "Jan 2, 2024");

        let d = parse_iso("2025-11-30").unwrap();
        assert_eq!(format_display(d), "Nov 30, 2025");
    }

    #[test]
    fn counts_whole_days() {
        let a = parse_iso("2024-01-01").unwrap();
        let b = parse_iso("2024-01-03").unwrap();
        assert_eq!(days_between(a, b), 2);
        assert_eq!(days_between(b, a), -2);
        assert_eq!(days_between(a, a), 0);

        // across a leap day
        let a = parse_iso("2024-02-28").unwrap();
        let b = parse_iso("2024-03-01").unwrap();
        assert_eq!(days_between(a, b), 2);
    }
}
