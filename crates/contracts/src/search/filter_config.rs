use super::FilterConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Группа фильтра: основные показываются всегда, остальные - в панели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterGroup {
    Primary,
    #[serde(other)]
    Secondary,
}

/// Search mode tag carried by multi-select params, e.g. `has_all:a,b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    HasAll,
    HasAny,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::HasAll => "has_all",
            SearchMode::HasAny => "has_any",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "has_all" => Some(SearchMode::HasAll),
            "has_any" => Some(SearchMode::HasAny),
            _ => None,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMultipleConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub search_mode: Option<SearchMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceConfig {
    pub min: i64,
    pub max: i64,
    #[serde(default = "default_price_step")]
    pub step: i64,
}

fn default_price_step() -> i64 {
    1
}

/// Закрытый набор видов фильтров, у каждого своя конфигурация.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Keyword,
    SelectSingle(SelectConfig),
    SelectMultiple(SelectMultipleConfig),
    DateRange,
    Price(PriceConfig),
}

/// Filter declaration as it appears in the config document, before the
/// `type` tag is resolved into a [`FilterKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub query_param_name: String,
    pub label: String,
    pub group: FilterGroup,
    #[serde(default = "empty_object")]
    pub config: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub id: String,
    pub kind: FilterKind,
    pub query_param_name: String,
    pub label: String,
    pub group: FilterGroup,
}

impl FilterConfig {
    pub fn is_primary(&self) -> bool {
        self.group == FilterGroup::Primary
    }
}

impl TryFrom<RawFilterConfig> for FilterConfig {
    type Error = FilterConfigError;

    fn try_from(raw: RawFilterConfig) -> Result<Self, Self::Error> {
        let invalid = |source| FilterConfigError::InvalidKindConfig {
            id: raw.id.clone(),
            source,
        };
        let config = if raw.config.is_null() {
            empty_object()
        } else {
            raw.config.clone()
        };

        let kind = match raw.kind.as_str() {
            "KeywordFilter" => FilterKind::Keyword,
            "SelectSingleFilter" => {
                FilterKind::SelectSingle(serde_json::from_value(config).map_err(invalid)?)
            }
            "SelectMultipleFilter" => {
                FilterKind::SelectMultiple(serde_json::from_value(config).map_err(invalid)?)
            }
            "BookingDateRangeFilter" => FilterKind::DateRange,
            "PriceFilter" => {
                let price: PriceConfig = serde_json::from_value(config).map_err(invalid)?;
                if price.min > price.max {
                    return Err(FilterConfigError::InvalidPriceBounds {
                        id: raw.id,
                        min: price.min,
                        max: price.max,
                    });
                }
                FilterKind::Price(price)
            }
            other => {
                return Err(FilterConfigError::UnsupportedKind {
                    id: raw.id.clone(),
                    kind: other.to_string(),
                })
            }
        };

        Ok(FilterConfig {
            id: raw.id,
            kind,
            query_param_name: raw.query_param_name,
            label: raw.label,
            group: raw.group,
        })
    }
}

/// Разбор сырых описаний и проверка, что параметры URL у фильтров не повторяются.
pub fn validate_filter_configs(
    raw: Vec<RawFilterConfig>,
) -> Result<Vec<FilterConfig>, FilterConfigError> {
    let mut filters: Vec<FilterConfig> = Vec::with_capacity(raw.len());
    for item in raw {
        let filter = FilterConfig::try_from(item)?;
        if let Some(existing) = filters
            .iter()
            .find(|f| f.query_param_name == filter.query_param_name)
        {
            return Err(FilterConfigError::DuplicateQueryParam {
                param: filter.query_param_name,
                first: existing.id.clone(),
                second: filter.id,
            });
        }
        filters.push(filter);
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawFilterConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_group_is_secondary() {
        let r = raw(json!({
            "id": "keyword", "type": "KeywordFilter", "queryParamName": "keywords",
            "label": "Keyword", "group": "extra"
        }));
        assert_eq!(r.group, FilterGroup::Secondary);
    }

    #[test]
    fn test_multi_select_config_resolves() {
        let r = raw(json!({
            "id": "amenities", "type": "SelectMultipleFilter", "queryParamName": "pub_amenities",
            "label": "Amenities", "group": "secondary",
            "config": { "searchMode": "has_all", "options": [{ "key": "towels", "label": "Towels" }] }
        }));
        let filter = FilterConfig::try_from(r).unwrap();
        match &filter.kind {
            FilterKind::SelectMultiple(c) => {
                assert_eq!(c.search_mode, Some(SearchMode::HasAll));
                assert_eq!(c.options[0].key, "towels");
            }
            other => panic!("unexpected kind {:?}", other),
        }
        assert!(!filter.is_primary());
    }

    #[test]
    fn test_unsupported_kind_is_reported() {
        let r = raw(json!({
            "id": "colour", "type": "ColourPickerFilter", "queryParamName": "colour",
            "label": "Colour", "group": "primary"
        }));
        match FilterConfig::try_from(r) {
            Err(FilterConfigError::UnsupportedKind { id, kind }) => {
                assert_eq!(id, "colour");
                assert_eq!(kind, "ColourPickerFilter");
            }
            other => panic!("expected UnsupportedKind, got {:?}", other),
        }
    }

    #[test]
    fn test_price_config_requires_ordered_bounds() {
        let r = raw(json!({
            "id": "price", "type": "PriceFilter", "queryParamName": "price",
            "label": "Price", "group": "primary", "config": { "min": 100, "max": 0 }
        }));
        assert!(matches!(
            FilterConfig::try_from(r),
            Err(FilterConfigError::InvalidPriceBounds { .. })
        ));
    }

    #[test]
    fn test_price_config_missing_bounds() {
        let r = raw(json!({
            "id": "price", "type": "PriceFilter", "queryParamName": "price",
            "label": "Price", "group": "primary"
        }));
        assert!(matches!(
            FilterConfig::try_from(r),
            Err(FilterConfigError::InvalidKindConfig { .. })
        ));
    }

    #[test]
    fn test_duplicate_query_param() {
        let items = vec![
            raw(json!({ "id": "a", "type": "KeywordFilter", "queryParamName": "q", "label": "A", "group": "primary" })),
            raw(json!({ "id": "b", "type": "KeywordFilter", "queryParamName": "q", "label": "B", "group": "primary" })),
        ];
        match validate_filter_configs(items) {
            Err(FilterConfigError::DuplicateQueryParam { param, first, second }) => {
                assert_eq!(param, "q");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("expected DuplicateQueryParam, got {:?}", other),
        }
    }
}
