//! Date formatting for entry tooltips.

use chrono::{Datelike, NaiveDate, Weekday};

/// Format an ISO `YYYY-MM-DD` date as a Japanese long-form date,
/// e.g. `2024-01-15` → `2024年1月15日月曜日`.
///
/// Returns `None` if the input is not a valid date.
pub fn format_date_ja(iso: &str) -> Option<String> {
    let day = iso.get(..10).unwrap_or(iso);
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(format!(
        "{}年{}月{}日{}",
        date.year(),
        date.month(),
        date.day(),
        weekday_ja(date.weekday())
    ))
}

fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_ja() {
        assert_eq!(format_date_ja("2024-01-15").as_deref(), Some("2024年1月15日月曜日"));
        assert_eq!(format_date_ja("2023-12-31").as_deref(), Some("2023年12月31日日曜日"));
    }

    #[test]
    fn test_datetime_prefix() {
        assert_eq!(
            format_date_ja("2024-02-29T08:30:00").as_deref(),
            Some("2024年2月29日木曜日")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_date_ja("2023-02-29"), None);
        assert_eq!(format_date_ja("yesterday"), None);
        assert_eq!(format_date_ja(""), None);
    }
}
