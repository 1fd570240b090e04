/// Утилиты для разбора и форматирования дат
///
/// В параметрах URL даты хранятся в ISO-8601 (`YYYY-MM-DD`).
use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` token. Surrounding whitespace is ignored.
pub fn parse_date_from_iso8601(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

pub fn stringify_date_to_iso8601(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date_from_iso8601("2020-05-28"),
            NaiveDate::from_ymd_opt(2020, 5, 28)
        );
        assert_eq!(
            parse_date_from_iso8601(" 2020-05-28 "),
            NaiveDate::from_ymd_opt(2020, 5, 28)
        );
        assert_eq!(parse_date_from_iso8601("2020-02-30"), None);
        assert_eq!(parse_date_from_iso8601("28.05.2020"), None);
        assert_eq!(parse_date_from_iso8601(""), None);
    }

    #[test]
    fn test_stringify_iso_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert_eq!(stringify_date_to_iso8601(date), "2020-01-02");
    }
}
