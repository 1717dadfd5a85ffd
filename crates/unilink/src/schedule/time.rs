//! Helpers for the `"HH:MM - HH:MM"` display range stored with each appointment.

/// Separator between start and end time in a time range.
pub const TIME_RANGE_SEPARATOR: &str = " - ";

/// Start time used for new forms and for records that have none.
pub const DEFAULT_START_TIME: &str = "09:00";

/// End time used for new forms and for records that have none.
pub const DEFAULT_END_TIME: &str = "10:30";

/// Joins a start and end time into a display range.
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{start}{TIME_RANGE_SEPARATOR}{end}")
}

/// Splits a display range back into `(start, end)`.
///
/// Returns `None` if the separator is missing.
pub fn split_time_range(range: &str) -> Option<(&str, &str)> {
    range.split_once(TIME_RANGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_split() {
        let range = format_time_range("09:00", "10:30");
        assert_eq!(range, "09:00 - 10:30");
        assert_eq!(split_time_range(&range), Some(("09:00", "10:30")));
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split_time_range("09:00-10:30"), None);
        assert_eq!(split_time_range(""), None);
    }

    #[test]
    fn test_zero_padded_ranges_sort_chronologically() {
        // Sorting views by the range string is only chronological because
        // every time is zero padded. "9:00" would sort after "14:00".
        let mut ranges = vec!["14:00 - 15:30", "09:00 - 10:30", "11:00 - 12:30"];
        ranges.sort();
        assert_eq!(ranges, vec!["09:00 - 10:30", "11:00 - 12:30", "14:00 - 15:30"]);

        let mut unpadded = vec!["14:00 - 15:30", "9:00 - 10:30"];
        unpadded.sort();
        assert_eq!(unpadded[0], "14:00 - 15:30");
    }
}
