//! Parse/format pairs between URL param strings and typed filter values.
//!
//! All codecs are total: malformed input parses to `None`, and a value that
//! cannot be expressed in the URL formats to `None` (the param is removed).

use crate::shared::date_utils::{parse_date_from_iso8601, stringify_date_to_iso8601};
use chrono::NaiveDate;
use contracts::search::SearchMode;

const RADIX: u32 = 10;

pub trait QueryParamCodec {
    type Value;

    fn parse(&self, raw: Option<&str>) -> Option<Self::Value>;
    fn format(&self, value: &Self::Value) -> Option<String>;
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCodec;

impl QueryParamCodec for KeywordCodec {
    type Value = String;

    fn parse(&self, raw: Option<&str>) -> Option<String> {
        non_empty(raw).map(str::to_string)
    }

    fn format(&self, value: &String) -> Option<String> {
        non_empty(Some(value)).map(str::to_string)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectSingleCodec;

impl QueryParamCodec for SelectSingleCodec {
    type Value = String;

    fn parse(&self, raw: Option<&str>) -> Option<String> {
        non_empty(raw).map(str::to_string)
    }

    fn format(&self, value: &String) -> Option<String> {
        non_empty(Some(value)).map(str::to_string)
    }
}

/// Опции из параметра мультивыбора вместе с режимом поиска, если он был указан.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiSelection {
    pub mode: Option<SearchMode>,
    pub options: Vec<String>,
}

/// Split a multi-select param: `"has_all:a,b,c"` or `"a,b,c"`.
///
/// Only the segment between the first and second `:` is the option list,
/// anything after a second `:` is ignored.
pub fn parse_select_filter_options(raw: &str) -> MultiSelection {
    let mut segments = raw.split(':');
    let (mode, list) = match (segments.next(), segments.next()) {
        (Some(tag), Some(list)) => (SearchMode::from_tag(tag), list),
        _ => (None, raw),
    };
    let options = list
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    MultiSelection { mode, options }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectMultipleCodec {
    pub search_mode: Option<SearchMode>,
}

impl SelectMultipleCodec {
    pub fn new(search_mode: Option<SearchMode>) -> Self {
        Self { search_mode }
    }

    pub fn parse_with_mode(&self, raw: Option<&str>) -> Option<MultiSelection> {
        let selection = parse_select_filter_options(non_empty(raw)?);
        if selection.options.is_empty() {
            None
        } else {
            Some(selection)
        }
    }
}

impl QueryParamCodec for SelectMultipleCodec {
    type Value = Vec<String>;

    fn parse(&self, raw: Option<&str>) -> Option<Vec<String>> {
        self.parse_with_mode(raw).map(|s| s.options)
    }

    fn format(&self, selected: &Vec<String>) -> Option<String> {
        if selected.is_empty() {
            return None;
        }
        let list = selected.join(",");
        Some(match self.search_mode {
            Some(mode) => format!("{}:{}", mode, list),
            None => list,
        })
    }
}

/// Диапазон дат в том виде, в каком его редактирует виджет: любая граница может быть не выбрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// `"2020-05-28,2020-05-31"`. Both dates or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeCodec;

impl QueryParamCodec for DateRangeCodec {
    type Value = DateRange;

    fn parse(&self, raw: Option<&str>) -> Option<DateRange> {
        let (start, end) = non_empty(raw)?.split_once(',')?;
        let start = parse_date_from_iso8601(start)?;
        let end = parse_date_from_iso8601(end)?;
        Some(DateRange::new(start, end))
    }

    fn format(&self, range: &DateRange) -> Option<String> {
        match (range.start, range.end) {
            (Some(start), Some(end)) => Some(format!(
                "{},{}",
                stringify_date_to_iso8601(start),
                stringify_date_to_iso8601(end)
            )),
            _ => None,
        }
    }
}

/// Границы цены; ноль - настоящая граница, отсутствие - `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl PriceRange {
    pub fn new(min_price: i64, max_price: i64) -> Self {
        Self {
            min_price: Some(min_price),
            max_price: Some(max_price),
        }
    }
}

/// `"<min>,<max>"` in base 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRangeCodec;

impl QueryParamCodec for PriceRangeCodec {
    type Value = PriceRange;

    fn parse(&self, raw: Option<&str>) -> Option<PriceRange> {
        let (min, max) = non_empty(raw)?.split_once(',')?;
        let min = i64::from_str_radix(min.trim(), RADIX).ok()?;
        let max = i64::from_str_radix(max.trim(), RADIX).ok()?;
        Some(PriceRange::new(min, max))
    }

    fn format(&self, range: &PriceRange) -> Option<String> {
        match (range.min_price, range.max_price) {
            (Some(min), Some(max)) => Some(format!("{},{}", min, max)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keyword_identity() {
        assert_eq!(KeywordCodec.parse(Some("red shoes")), Some("red shoes".to_string()));
        assert_eq!(KeywordCodec.parse(Some("")), None);
        assert_eq!(KeywordCodec.parse(None), None);
        assert_eq!(KeywordCodec.format(&String::new()), None);
        assert_eq!(SelectSingleCodec.format(&"wood".to_string()), Some("wood".to_string()));
    }

    #[test]
    fn test_price_round_trip() {
        for (min, max) in [(0, 0), (0, 100), (10, 50), (999, 1000)] {
            let range = PriceRange::new(min, max);
            let formatted = PriceRangeCodec.format(&range);
            assert_eq!(PriceRangeCodec.parse(formatted.as_deref()), Some(range));
        }
    }

    #[test]
    fn test_price_zero_bound_is_kept() {
        assert_eq!(
            PriceRangeCodec.format(&PriceRange::new(0, 100)),
            Some("0,100".to_string())
        );
        assert_eq!(
            PriceRangeCodec.parse(Some("0,0")),
            Some(PriceRange::new(0, 0))
        );
    }

    #[test]
    fn test_price_partial_or_invalid() {
        assert_eq!(PriceRangeCodec.parse(Some("10")), None);
        assert_eq!(PriceRangeCodec.parse(Some("10,")), None);
        assert_eq!(PriceRangeCodec.parse(Some(",50")), None);
        assert_eq!(PriceRangeCodec.parse(Some("a,b")), None);
        assert_eq!(PriceRangeCodec.parse(Some("1,2,3")), None);
        assert_eq!(PriceRangeCodec.parse(Some("")), None);

        let half = PriceRange {
            min_price: Some(0),
            max_price: None,
        };
        assert_eq!(PriceRangeCodec.format(&half), None);
    }

    #[test]
    fn test_date_round_trip() {
        let range = DateRange::new(date(2020, 5, 28), date(2020, 5, 31));
        let formatted = DateRangeCodec.format(&range);
        assert_eq!(formatted.as_deref(), Some("2020-05-28,2020-05-31"));
        assert_eq!(DateRangeCodec.parse(formatted.as_deref()), Some(range));
    }

    #[test]
    fn test_date_both_or_nothing() {
        assert_eq!(DateRangeCodec.parse(Some("2020-05-28")), None);
        assert_eq!(DateRangeCodec.parse(Some("2020-05-28,")), None);
        assert_eq!(DateRangeCodec.parse(Some("2020-05-28,garbage")), None);
        assert_eq!(DateRangeCodec.parse(None), None);

        let half = DateRange {
            start: Some(date(2020, 5, 28)),
            end: None,
        };
        assert!(!half.is_complete());
        assert_eq!(DateRangeCodec.format(&half), None);
    }

    #[test]
    fn test_multi_select_mode_round_trip() {
        let codec = SelectMultipleCodec::new(Some(SearchMode::HasAll));
        let parsed = codec.parse_with_mode(Some("has_all:a,b,c")).unwrap();
        assert_eq!(parsed.mode, Some(SearchMode::HasAll));
        assert_eq!(parsed.options, vec!["a", "b", "c"]);

        let selected: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(codec.format(&selected), Some("has_all:a,b,c".to_string()));
    }

    #[test]
    fn test_multi_select_extra_colon_segments_are_dropped() {
        let parsed = parse_select_filter_options("a:b:c");
        assert_eq!(parsed.mode, None);
        assert_eq!(parsed.options, vec!["b"]);

        let parsed = parse_select_filter_options("has_any:towels,jacuzzi:extra");
        assert_eq!(parsed.mode, Some(SearchMode::HasAny));
        assert_eq!(parsed.options, vec!["towels", "jacuzzi"]);
    }

    #[test]
    fn test_multi_select_without_mode() {
        let codec = SelectMultipleCodec::default();
        assert_eq!(
            codec.parse(Some("towels,jacuzzi")),
            Some(vec!["towels".to_string(), "jacuzzi".to_string()])
        );
        assert_eq!(
            codec.format(&vec!["towels".to_string()]),
            Some("towels".to_string())
        );
        assert_eq!(codec.format(&Vec::new()), None);
        assert_eq!(codec.parse(Some("has_any:")), None);
        assert_eq!(codec.parse(Some("")), None);
    }
}
