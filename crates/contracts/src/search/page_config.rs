use super::filter_config::validate_filter_configs;
use super::{FilterConfig, FilterConfigError, RawFilterConfig, SortConfig};
use serde::Deserialize;

/// Validated configuration of the search page: filters in display order
/// plus the sort control settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPageConfig {
    pub filters: Vec<FilterConfig>,
    pub sort: SortConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPageConfigJson {
    #[serde(default)]
    filters: Vec<RawFilterConfig>,
    #[serde(default)]
    sort_config: SortConfig,
}

/// Конфигурация по умолчанию, встроенная в бинарник
pub const DEFAULT_SEARCH_PAGE_CONFIG: &str = r#"
{
    "filters": [
        {
            "id": "dates",
            "type": "BookingDateRangeFilter",
            "queryParamName": "dates",
            "label": "Даты",
            "group": "primary"
        },
        {
            "id": "price",
            "type": "PriceFilter",
            "queryParamName": "price",
            "label": "Цена",
            "group": "primary",
            "config": { "min": 0, "max": 1000, "step": 5 }
        },
        {
            "id": "keyword",
            "type": "KeywordFilter",
            "queryParamName": "keywords",
            "label": "Поиск",
            "group": "primary"
        },
        {
            "id": "category",
            "type": "SelectSingleFilter",
            "queryParamName": "pub_category",
            "label": "Категория",
            "group": "secondary",
            "config": {
                "options": [
                    { "key": "smoke", "label": "Smoke" },
                    { "key": "electric", "label": "Electric" },
                    { "key": "wood", "label": "Wood" },
                    { "key": "other", "label": "Other" }
                ]
            }
        },
        {
            "id": "amenities",
            "type": "SelectMultipleFilter",
            "queryParamName": "pub_amenities",
            "label": "Удобства",
            "group": "secondary",
            "config": {
                "searchMode": "has_all",
                "options": [
                    { "key": "towels", "label": "Towels" },
                    { "key": "bathroom", "label": "Bathroom" },
                    { "key": "swimming_pool", "label": "Swimming pool" },
                    { "key": "own_drinks", "label": "Own drinks allowed" },
                    { "key": "jacuzzi", "label": "Jacuzzi" },
                    { "key": "audiovisual_entertainment", "label": "Audiovisual entertainment" },
                    { "key": "barbeque", "label": "Barbeque" },
                    { "key": "own_food_allowed", "label": "Own food allowed" }
                ]
            }
        }
    ],
    "sortConfig": {
        "active": true,
        "queryParamName": "sort",
        "relevanceKey": "relevance",
        "defaultKey": "createdAt",
        "conflictingFilters": ["keyword"],
        "options": [
            { "key": "createdAt", "label": "Сначала новые" },
            { "key": "-createdAt", "label": "Сначала старые" },
            { "key": "-price", "label": "Сначала дешевые" },
            { "key": "price", "label": "Сначала дорогие" },
            { "key": "relevance", "label": "По релевантности" }
        ]
    }
}
"#;

/// Parse and validate a search page configuration document.
///
/// Unknown filter types, malformed per-type config, duplicated query params
/// and sort conflicts naming unknown filters are all rejected here, so the
/// UI only ever sees filters it can render.
pub fn load_search_page_config(json: &str) -> Result<SearchPageConfig, FilterConfigError> {
    let parsed: SearchPageConfigJson = serde_json::from_str(json)?;
    let filters = validate_filter_configs(parsed.filters)?;

    if let Some(unknown) = parsed
        .sort_config
        .conflicting_filters
        .iter()
        .find(|id| !filters.iter().any(|f| &f.id == *id))
    {
        return Err(FilterConfigError::UnknownConflictingFilter(unknown.clone()));
    }

    Ok(SearchPageConfig {
        filters,
        sort: parsed.sort_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterKind;

    #[test]
    fn test_default_config_loads() {
        let config = load_search_page_config(DEFAULT_SEARCH_PAGE_CONFIG);
        assert!(config.is_ok(), "{:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.filters.len(), 5);
        assert_eq!(config.filters.iter().filter(|f| f.is_primary()).count(), 3);
        assert!(config.sort.active);
        assert_eq!(config.sort.conflicting_filters, vec!["keyword".to_string()]);
        assert!(matches!(config.filters[1].kind, FilterKind::Price(p) if p.step == 5));
    }

    #[test]
    fn test_missing_sort_config_uses_defaults() {
        let config = load_search_page_config(r#"{ "filters": [] }"#).unwrap();
        assert!(!config.sort.active);
        assert_eq!(config.sort.query_param_name, "sort");
        assert_eq!(config.sort.relevance_key, "relevance");
    }

    #[test]
    fn test_unknown_conflicting_filter() {
        let json = r#"{
            "filters": [],
            "sortConfig": { "active": true, "conflictingFilters": ["keyword"] }
        }"#;
        match load_search_page_config(json) {
            Err(FilterConfigError::UnknownConflictingFilter(id)) => assert_eq!(id, "keyword"),
            other => panic!("expected UnknownConflictingFilter, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            load_search_page_config("{ not json"),
            Err(FilterConfigError::Json(_))
        ));
    }
}
