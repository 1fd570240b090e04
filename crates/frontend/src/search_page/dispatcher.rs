//! Maps a filter declaration to the control that renders it.

use super::codec::{
    DateRange, DateRangeCodec, KeywordCodec, PriceRange, PriceRangeCodec, QueryParamCodec,
    SelectMultipleCodec, SelectSingleCodec,
};
use super::draft::EffectiveParams;
use contracts::search::{FilterConfig, FilterKind, PriceConfig, SelectOption};

/// Контейнер, в котором рендерится фильтр.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterHost {
    /// Панель над результатами; основные фильтры в попапах.
    SearchFilters,
    /// Модальное окно на мобильных; все фильтры, изменения сразу в URL.
    SearchFiltersMobile,
    /// Панель дополнительных фильтров с "Применить"/"Отмена".
    SearchFiltersPanel,
}

impl FilterHost {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            FilterHost::SearchFilters => "SearchFilters",
            FilterHost::SearchFiltersMobile => "SearchFiltersMobile",
            FilterHost::SearchFiltersPanel => "SearchFiltersPanel",
        }
    }

    pub fn live_edit(&self) -> bool {
        matches!(self, FilterHost::SearchFiltersMobile)
    }

    pub fn show_as_popup(&self) -> bool {
        matches!(self, FilterHost::SearchFilters)
    }

    /// Changes made in this host go straight to the URL instead of the draft.
    pub fn use_history_push(&self) -> bool {
        self.live_edit() || self.show_as_popup()
    }

    /// Показывается ли фильтр в этом контейнере
    pub fn shows(&self, filter: &FilterConfig) -> bool {
        match self {
            FilterHost::SearchFilters => filter.is_primary(),
            FilterHost::SearchFiltersMobile => true,
            FilterHost::SearchFiltersPanel => !filter.is_primary(),
        }
    }
}

/// Виджет для рендера с уже разобранным начальным значением.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterWidget {
    Keyword {
        initial: Option<String>,
    },
    SelectSingle {
        options: Vec<SelectOption>,
        initial: Option<String>,
    },
    SelectMultiple {
        options: Vec<SelectOption>,
        codec: SelectMultipleCodec,
        initial: Vec<String>,
    },
    DateRange {
        initial: Option<DateRange>,
    },
    Price {
        config: PriceConfig,
        initial: Option<PriceRange>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub component_id: String,
    pub name: String,
    pub label: String,
    pub query_param_name: String,
    pub use_history_push: bool,
    /// Ревизия контроллера на момент построения; входит в ключ рендера
    pub revision: u64,
    pub widget: FilterWidget,
}

/// `"SearchFilters.price"`
pub fn component_id(host: FilterHost, filter_id: &str) -> String {
    format!("{}.{}", host.id_prefix(), filter_id.to_lowercase())
}

/// Filter id with whitespace runs replaced by `-`, lowercased
pub fn control_name(filter_id: &str) -> String {
    filter_id
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn dispatch_filter(
    filter: &FilterConfig,
    host: FilterHost,
    values: &EffectiveParams<'_>,
) -> FilterControl {
    let param = filter.query_param_name.as_str();

    let widget = match &filter.kind {
        FilterKind::Keyword => FilterWidget::Keyword {
            initial: values.initial_value(param, |raw| KeywordCodec.parse(raw)),
        },
        FilterKind::SelectSingle(config) => FilterWidget::SelectSingle {
            options: config.options.clone(),
            initial: values.initial_value(param, |raw| SelectSingleCodec.parse(raw)),
        },
        FilterKind::SelectMultiple(config) => {
            let codec = SelectMultipleCodec::new(config.search_mode);
            FilterWidget::SelectMultiple {
                options: config.options.clone(),
                codec,
                initial: values
                    .initial_value(param, |raw| codec.parse(raw))
                    .unwrap_or_default(),
            }
        }
        FilterKind::DateRange => FilterWidget::DateRange {
            initial: values.initial_value(param, |raw| DateRangeCodec.parse(raw)),
        },
        FilterKind::Price(config) => FilterWidget::Price {
            config: *config,
            initial: values.initial_value(param, |raw| PriceRangeCodec.parse(raw)),
        },
    };

    FilterControl {
        component_id: component_id(host, &filter.id),
        name: control_name(&filter.id),
        label: filter.label.clone(),
        query_param_name: filter.query_param_name.clone(),
        use_history_push: host.use_history_push(),
        revision: 0,
        widget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_page::draft::DraftState;
    use contracts::search::{load_search_page_config, QueryParams, DEFAULT_SEARCH_PAGE_CONFIG};

    fn filter(id: &str) -> FilterConfig {
        load_search_page_config(DEFAULT_SEARCH_PAGE_CONFIG)
            .unwrap()
            .filters
            .into_iter()
            .find(|f| f.id == id)
            .unwrap()
    }

    #[test]
    fn test_history_push_per_host() {
        assert!(FilterHost::SearchFilters.use_history_push());
        assert!(FilterHost::SearchFiltersMobile.use_history_push());
        assert!(!FilterHost::SearchFiltersPanel.use_history_push());
    }

    #[test]
    fn test_hosts_partition_filters() {
        let price = filter("price");
        let amenities = filter("amenities");
        assert!(FilterHost::SearchFilters.shows(&price));
        assert!(!FilterHost::SearchFilters.shows(&amenities));
        assert!(FilterHost::SearchFiltersPanel.shows(&amenities));
        assert!(FilterHost::SearchFiltersMobile.shows(&price));
        assert!(FilterHost::SearchFiltersMobile.shows(&amenities));
    }

    #[test]
    fn test_ids_and_names() {
        assert_eq!(component_id(FilterHost::SearchFiltersPanel, "Amenities"), "SearchFiltersPanel.amenities");
        assert_eq!(control_name("Pet  Friendly Places"), "pet-friendly-places");
    }

    #[test]
    fn test_draft_shadows_committed_initial_value() {
        let mut committed = QueryParams::new();
        committed.insert("price".to_string(), "10,50".to_string());
        let mut draft = DraftState::new();
        draft.insert("price".to_string(), Some("20,60".to_string()));

        let control = dispatch_filter(
            &filter("price"),
            FilterHost::SearchFiltersPanel,
            &EffectiveParams::new(&committed, &draft),
        );
        match control.widget {
            FilterWidget::Price { initial, config } => {
                assert_eq!(initial, Some(PriceRange::new(20, 60)));
                assert_eq!(config.max, 1000);
            }
            other => panic!("unexpected widget {:?}", other),
        }
        assert!(!control.use_history_push);
        assert_eq!(control.component_id, "SearchFiltersPanel.price");
    }

    #[test]
    fn test_multi_select_initial_values() {
        let mut committed = QueryParams::new();
        committed.insert("pub_amenities".to_string(), "has_all:towels,jacuzzi".to_string());
        let draft = DraftState::new();

        let control = dispatch_filter(
            &filter("amenities"),
            FilterHost::SearchFiltersMobile,
            &EffectiveParams::new(&committed, &draft),
        );
        assert!(control.use_history_push);
        match control.widget {
            FilterWidget::SelectMultiple { initial, options, .. } => {
                assert_eq!(initial, vec!["towels", "jacuzzi"]);
                assert_eq!(options.len(), 8);
            }
            other => panic!("unexpected widget {:?}", other),
        }
    }

    #[test]
    fn test_cleared_draft_hides_committed_value() {
        let mut committed = QueryParams::new();
        committed.insert("dates".to_string(), "2020-05-28,2020-05-31".to_string());
        let mut draft = DraftState::new();
        draft.insert("dates".to_string(), None);

        let control = dispatch_filter(
            &filter("dates"),
            FilterHost::SearchFilters,
            &EffectiveParams::new(&committed, &draft),
        );
        assert_eq!(control.widget, FilterWidget::DateRange { initial: None });
    }
}
