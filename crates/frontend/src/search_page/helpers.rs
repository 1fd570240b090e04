//! Вспомогательные вычисления для страницы поиска (без состояния)

use super::codec::{
    parse_select_filter_options, DateRangeCodec, KeywordCodec, PriceRangeCodec, QueryParamCodec,
};
use contracts::search::{FilterConfig, FilterKind, QueryParams, SortConfig};

/// The filter-owned params of `params` that carry a meaningful value.
///
/// Select values are intersected with the configured option keys; price
/// ranges must parse and stay within the configured bounds; date ranges must
/// be complete; keywords must be non-empty. Anything else is dropped.
pub fn valid_filter_params(params: &QueryParams, filters: &[FilterConfig]) -> QueryParams {
    filters
        .iter()
        .filter_map(|filter| {
            let raw = params.get(&filter.query_param_name)?;
            let value = valid_filter_value(filter, raw)?;
            Some((filter.query_param_name.clone(), value))
        })
        .collect()
}

fn valid_filter_value(filter: &FilterConfig, raw: &str) -> Option<String> {
    match &filter.kind {
        FilterKind::Keyword => KeywordCodec.parse(Some(raw)),
        FilterKind::SelectSingle(config) => config
            .options
            .iter()
            .any(|o| o.key == raw)
            .then(|| raw.to_string()),
        FilterKind::SelectMultiple(config) => {
            let selection = parse_select_filter_options(raw);
            let valid: Vec<&str> = selection
                .options
                .iter()
                .map(String::as_str)
                .filter(|key| config.options.iter().any(|o| o.key == *key))
                .collect();
            if valid.is_empty() {
                return None;
            }
            let list = valid.join(",");
            Some(match selection.mode {
                Some(mode) => format!("{}:{}", mode, list),
                None => list,
            })
        }
        FilterKind::DateRange => {
            let range = DateRangeCodec.parse(Some(raw))?;
            DateRangeCodec.format(&range)
        }
        FilterKind::Price(config) => {
            let range = PriceRangeCodec.parse(Some(raw))?;
            let (min, max) = (range.min_price?, range.max_price?);
            let in_bounds = config.min <= min && min <= max && max <= config.max;
            in_bounds.then(|| PriceRangeCodec.format(&range)).flatten()
        }
    }
}

/// Первый ключ из `params`, принадлежащий одному из `filter_ids`.
pub fn find_active_filter<'a>(
    filter_ids: &[String],
    params: &'a QueryParams,
    filters: &[FilterConfig],
) -> Option<&'a str> {
    let active_keys: Vec<&str> = filters
        .iter()
        .filter(|f| filter_ids.contains(&f.id))
        .map(|f| f.query_param_name.as_str())
        .collect();

    params
        .keys()
        .map(String::as_str)
        .find(|key| active_keys.contains(key))
}

/// Опция сортировки в том виде, как её показывает контрол
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionState {
    pub key: String,
    pub label: String,
    pub disabled: bool,
}

/// Relevance is only selectable while a conflicting filter is active, and
/// then it is the only selectable option.
pub fn sort_option_states(sort: &SortConfig, conflicting_filter_active: bool) -> Vec<SortOptionState> {
    sort.options
        .iter()
        .map(|option| {
            let is_relevance = option.key == sort.relevance_key;
            SortOptionState {
                key: option.key.clone(),
                label: option.label.clone(),
                disabled: is_relevance != conflicting_filter_active,
            }
        })
        .collect()
}

pub fn sort_initial_value(
    sort: &SortConfig,
    params: &QueryParams,
    conflicting_filter_active: bool,
) -> String {
    if conflicting_filter_active {
        return sort.relevance_key.clone();
    }
    params
        .get(&sort.query_param_name)
        .cloned()
        .unwrap_or_else(|| sort.default_key.clone())
}

/// Всё, что нужно контролу сортировки для одного состояния URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortControlState {
    pub query_param_name: String,
    pub options: Vec<SortOptionState>,
    pub value: String,
}

/// `None`, если сортировка выключена в конфигурации.
pub fn sort_control_state(
    sort: &SortConfig,
    params: &QueryParams,
    conflicting_filter_active: bool,
) -> Option<SortControlState> {
    if !sort.active {
        return None;
    }
    Some(SortControlState {
        query_param_name: sort.query_param_name.clone(),
        options: sort_option_states(sort, conflicting_filter_active),
        value: sort_initial_value(sort, params, conflicting_filter_active),
    })
}

/// Состояние области результатов поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsState {
    pub listings_are_loaded: bool,
    pub results_count: usize,
}

pub fn results_state(
    search_in_progress: bool,
    search_params_are_in_sync: bool,
    total_items: Option<usize>,
) -> ResultsState {
    let has_pagination_info = total_items.is_some();
    let results_count = match total_items {
        Some(total) if search_params_are_in_sync => total,
        _ => 0,
    };
    ResultsState {
        listings_are_loaded: !search_in_progress && search_params_are_in_sync && has_pagination_info,
        results_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::search::{load_search_page_config, DEFAULT_SEARCH_PAGE_CONFIG};

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn config() -> contracts::search::SearchPageConfig {
        load_search_page_config(DEFAULT_SEARCH_PAGE_CONFIG).unwrap()
    }

    #[test]
    fn test_valid_filter_params() {
        let config = config();
        let url = params(&[
            ("price", "0,100"),
            ("dates", "2020-05-28"),
            ("keywords", "red"),
            ("pub_category", "plastic"),
            ("pub_amenities", "has_all:towels,unknown,jacuzzi"),
            ("sort", "createdAt"),
        ]);

        let valid = valid_filter_params(&url, &config.filters);
        assert_eq!(
            valid,
            params(&[
                ("price", "0,100"),
                ("keywords", "red"),
                ("pub_amenities", "has_all:towels,jacuzzi"),
            ])
        );
    }

    #[test]
    fn test_price_out_of_bounds_is_not_active() {
        let config = config();
        assert!(valid_filter_params(&params(&[("price", "0,5000")]), &config.filters).is_empty());
        assert!(valid_filter_params(&params(&[("price", "60,50")]), &config.filters).is_empty());
    }

    #[test]
    fn test_find_active_filter() {
        let config = config();
        let ids = vec!["keyword".to_string()];

        let url = params(&[("keywords", "red"), ("price", "0,100")]);
        assert_eq!(find_active_filter(&ids, &url, &config.filters), Some("keywords"));

        let url = params(&[("price", "0,100")]);
        assert_eq!(find_active_filter(&ids, &url, &config.filters), None);
    }

    #[test]
    fn test_sort_options_follow_conflict() {
        let config = config();

        let normal = sort_option_states(&config.sort, false);
        let relevance = normal.iter().find(|o| o.key == "relevance").unwrap();
        assert!(relevance.disabled);
        assert!(normal.iter().filter(|o| o.key != "relevance").all(|o| !o.disabled));

        let conflict = sort_option_states(&config.sort, true);
        assert!(conflict.iter().all(|o| o.disabled == (o.key != "relevance")));
    }

    #[test]
    fn test_sort_initial_value() {
        let config = config();
        assert_eq!(sort_initial_value(&config.sort, &QueryParams::new(), false), "createdAt");
        assert_eq!(
            sort_initial_value(&config.sort, &params(&[("sort", "-price")]), false),
            "-price"
        );
        assert_eq!(
            sort_initial_value(&config.sort, &params(&[("sort", "-price")]), true),
            "relevance"
        );
    }

    #[test]
    fn test_sort_control_state() {
        let mut config = config();
        let state = sort_control_state(&config.sort, &params(&[("sort", "price")]), false).unwrap();
        assert_eq!(state.query_param_name, "sort");
        assert_eq!(state.value, "price");
        assert_eq!(state.options.len(), 5);

        config.sort.active = false;
        assert_eq!(sort_control_state(&config.sort, &QueryParams::new(), false), None);
    }

    #[test]
    fn test_results_state() {
        assert_eq!(
            results_state(false, true, Some(12)),
            ResultsState { listings_are_loaded: true, results_count: 12 }
        );
        assert_eq!(
            results_state(true, true, Some(12)),
            ResultsState { listings_are_loaded: false, results_count: 12 }
        );
        assert_eq!(
            results_state(false, false, Some(12)),
            ResultsState { listings_are_loaded: false, results_count: 0 }
        );
        assert!(!results_state(false, true, None).listings_are_loaded);
    }
}
