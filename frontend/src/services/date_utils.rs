use chrono::{Local, NaiveDate};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date for display (e.g., "Mar 5, 2025")
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an optional backend timestamp such as "2025-03-09T10:00:00".
///
/// Only the date part is shown; unparseable input is returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .and_then(|date_part| NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok())
        .map(format_date)
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2025");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-03-09T10:00:00"), "Mar 9, 2025");
        assert_eq!(format_timestamp("2025-12-31"), "Dec 31, 2025");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
