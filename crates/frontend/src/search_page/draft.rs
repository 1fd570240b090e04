//! Draft (not yet committed) filter edits layered over the URL params.

use contracts::search::QueryParams;
use std::collections::BTreeMap;

/// Param name -> formatted value. `None` marks a param the user cleared,
/// it shadows the committed value and is dropped on merge.
pub type DraftState = BTreeMap<String, Option<String>>;

/// Three-layer resolution: committed <- draft <- the new value for `key`.
pub fn resolve_draft(
    committed: &QueryParams,
    draft: &DraftState,
    key: &str,
    value: Option<String>,
) -> DraftState {
    let mut next: DraftState = committed
        .iter()
        .map(|(k, v)| (k.clone(), Some(v.clone())))
        .collect();
    next.extend(draft.iter().map(|(k, v)| (k.clone(), v.clone())));
    next.insert(key.to_string(), value);
    next
}

/// Параметры для навигации: URL поверх черновика, очищенные ключи удаляются.
pub fn merge_params(committed: &QueryParams, draft: &DraftState) -> QueryParams {
    let mut merged = committed.clone();
    for (key, value) in draft {
        match value {
            Some(v) => {
                merged.insert(key.clone(), v.clone());
            }
            None => {
                merged.remove(key);
            }
        }
    }
    merged
}

/// Значения, которые должны показывать контролы фильтров (только чтение).
#[derive(Debug, Clone, Copy)]
pub struct EffectiveParams<'a> {
    pub committed: &'a QueryParams,
    pub draft: &'a DraftState,
}

impl<'a> EffectiveParams<'a> {
    pub fn new(committed: &'a QueryParams, draft: &'a DraftState) -> Self {
        Self { committed, draft }
    }

    /// Raw value: a draft entry wins over the committed one, even when it is a removal.
    pub fn get(&self, param: &str) -> Option<&'a str> {
        match self.draft.get(param) {
            Some(value) => value.as_deref(),
            None => self.committed.get(param).map(String::as_str),
        }
    }

    pub fn initial_value<T>(&self, param: &str, parse: impl FnOnce(Option<&str>) -> T) -> T {
        parse(self.get(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_layers_in_order() {
        let committed = params(&[("price", "10,50"), ("keywords", "red")]);
        let mut draft = DraftState::new();
        draft.insert("price".to_string(), Some("20,60".to_string()));

        let next = resolve_draft(&committed, &draft, "pub_category", Some("wood".to_string()));
        assert_eq!(next.get("price"), Some(&Some("20,60".to_string())));
        assert_eq!(next.get("keywords"), Some(&Some("red".to_string())));
        assert_eq!(next.get("pub_category"), Some(&Some("wood".to_string())));
    }

    #[test]
    fn test_resolve_new_value_overrides_draft() {
        let committed = params(&[("price", "10,50")]);
        let mut draft = DraftState::new();
        draft.insert("price".to_string(), Some("20,60".to_string()));

        let next = resolve_draft(&committed, &draft, "price", None);
        assert_eq!(next.get("price"), Some(&None));
        assert!(!merge_params(&committed, &next).contains_key("price"));
    }

    #[test]
    fn test_draft_shadows_committed() {
        let committed = params(&[("price", "10,50"), ("dates", "2020-05-28,2020-05-31")]);
        let mut draft = DraftState::new();
        draft.insert("price".to_string(), Some("20,60".to_string()));
        draft.insert("dates".to_string(), None);

        let effective = EffectiveParams::new(&committed, &draft);
        assert_eq!(effective.get("price"), Some("20,60"));
        assert_eq!(effective.get("dates"), None);
        assert_eq!(effective.get("missing"), None);
        assert_eq!(effective.initial_value("price", |v| v.map(str::len)), Some(5));
    }

    #[test]
    fn test_merge_params() {
        let committed = params(&[("a", "1"), ("b", "2")]);
        let mut draft = DraftState::new();
        draft.insert("b".to_string(), None);
        draft.insert("c".to_string(), Some("3".to_string()));

        assert_eq!(merge_params(&committed, &draft), params(&[("a", "1"), ("c", "3")]));
    }
}
