//! Query string <-> [`QueryParams`] conversion

use contracts::search::QueryParams;

/// Parse `?a=1&b=2` (leading `?` optional). Malformed input yields no params.
pub fn parse_query_string(search: &str) -> QueryParams {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn stringify_query_params(params: &QueryParams) -> String {
    serde_qs::to_string(params).unwrap_or_default()
}

/// Параметры текущего адреса браузера; вне браузера пусто
pub fn current_query_params() -> QueryParams {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query_string(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string() {
        let params = parse_query_string("?keywords=red&price=10,50");
        assert_eq!(params.get("keywords").map(String::as_str), Some("red"));
        assert_eq!(params.get("price").map(String::as_str), Some("10,50"));
        assert!(parse_query_string("").is_empty());
    }

    #[test]
    fn test_round_trip_keeps_separators() {
        let mut params = QueryParams::new();
        params.insert("pub_amenities".to_string(), "has_all:towels,jacuzzi".to_string());
        params.insert("keywords".to_string(), "red shoes".to_string());

        let qs = stringify_query_params(&params);
        assert_eq!(parse_query_string(&qs), params);
    }

    #[test]
    fn test_stringify_is_ordered() {
        let mut params = QueryParams::new();
        params.insert("b".to_string(), "2".to_string());
        params.insert("a".to_string(), "1".to_string());
        assert_eq!(stringify_query_params(&params), "a=1&b=2");
    }
}
