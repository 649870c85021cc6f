use chrono::NaiveDate;
use shared::{Clock, SystemClock};

const INPUT_FORMAT: &str = "%Y-%m-%d";

pub struct DateUtils;

impl DateUtils {
    /// Today in the browser's local time zone
    pub fn today() -> NaiveDate {
        let now = js_sys::Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() + 1; // JavaScript months are 0-indexed
        let day = now.get_date();
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| SystemClock.today())
    }

    /// Value for an `<input type="date">`
    pub fn to_input_value(date: NaiveDate) -> String {
        date.format(INPUT_FORMAT).to_string()
    }

    pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
    }

    /// e.g. "Jan 5, 2024"
    pub fn format_display(date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(DateUtils::to_input_value(date), "2024-03-09");
        assert_eq!(DateUtils::parse_input_value(" 2024-03-09 "), Some(date));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert_eq!(DateUtils::parse_input_value(""), None);
        assert_eq!(DateUtils::parse_input_value("09/03/2024"), None);
        assert_eq!(DateUtils::parse_input_value("2024-02-30"), None);
    }

    #[test]
    fn test_display_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(DateUtils::format_display(date), "Jan 5, 2024");
    }
}
