//! Draft state and URL commits of the search page filters.
//!
//! Committed params live in the URL and are owned by the caller, so every
//! operation that needs them takes them as an argument. The controller only
//! owns what the URL does not hold: the draft and the panel toggle.

use super::dispatcher::{dispatch_filter, FilterControl, FilterHost};
use super::draft::{merge_params, resolve_draft, DraftState, EffectiveParams};
use super::helpers::{find_active_filter, sort_control_state, valid_filter_params, SortControlState};
use crate::routes::Location;
use crate::shared::history::Navigator;
use contracts::search::{FilterConfig, QueryParams, SearchPageConfig, SortConfig};

pub struct PanelController<N: Navigator> {
    filters: Vec<FilterConfig>,
    sort: SortConfig,
    draft: DraftState,
    is_search_filters_panel_open: bool,
    /// Растёт, когда контролы должны перечитать значения из URL
    revision: u64,
    navigator: N,
}

impl<N: Navigator> PanelController<N> {
    pub fn new(config: SearchPageConfig, navigator: N) -> Self {
        Self {
            filters: config.filters,
            sort: config.sort,
            draft: DraftState::new(),
            is_search_filters_panel_open: false,
            revision: 0,
            navigator,
        }
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn primary_filters(&self) -> impl Iterator<Item = &FilterConfig> {
        self.filters.iter().filter(|f| f.is_primary())
    }

    pub fn secondary_filters(&self) -> impl Iterator<Item = &FilterConfig> {
        self.filters.iter().filter(|f| !f.is_primary())
    }

    pub fn has_secondary_filters(&self) -> bool {
        self.secondary_filters().next().is_some()
    }

    /// Контролы всех фильтров контейнера в порядке конфигурации.
    pub fn controls_for(&self, host: FilterHost, committed: &QueryParams) -> Vec<FilterControl> {
        let values = EffectiveParams::new(committed, &self.draft);
        self.filters
            .iter()
            .filter(|f| host.shows(f))
            .map(|f| {
                let mut control = dispatch_filter(f, host, &values);
                control.revision = self.revision;
                control
            })
            .collect()
    }

    /// Начальное значение контрола: сначала черновик, потом URL.
    pub fn initial_value<T>(
        &self,
        committed: &QueryParams,
        param: &str,
        parse: impl FnOnce(Option<&str>) -> T,
    ) -> T {
        EffectiveParams::new(committed, &self.draft).initial_value(param, parse)
    }

    /// Record a formatted value in the draft; commit right away when
    /// `use_history_push` is set.
    pub fn set_value(
        &mut self,
        committed: &QueryParams,
        param: &str,
        formatted: Option<String>,
        use_history_push: bool,
    ) {
        self.draft = resolve_draft(committed, &self.draft, param, formatted);

        if use_history_push {
            let search = merge_params(committed, &self.draft);
            self.draft.clear();
            self.navigate(search);
        }
    }

    /// Change handler for a typed control value. A missing value clears the param.
    pub fn handle_changed_value<T>(
        &mut self,
        committed: &QueryParams,
        param: &str,
        value: Option<&T>,
        use_history_push: bool,
        format: impl FnOnce(&T) -> Option<String>,
    ) {
        let formatted = value.and_then(format);
        self.set_value(committed, param, formatted, use_history_push);
    }

    pub fn apply_filters(&mut self, committed: &QueryParams) {
        let search = merge_params(committed, &self.draft);
        self.draft.clear();
        self.revision += 1;
        self.navigate(search);
    }

    /// Сбросить черновик; контролы возвращаются к значениям из URL.
    pub fn cancel_filters(&mut self) {
        self.draft.clear();
        self.revision += 1;
    }

    /// URL changed outside the controller (back/forward): drop the draft and
    /// let every control re-read its value.
    pub fn sync_from_history(&mut self) {
        self.draft.clear();
        self.revision += 1;
    }

    /// Убрать все параметры фильтров из URL одной навигацией.
    pub fn reset_all(&mut self, committed: &QueryParams) {
        self.draft.clear();
        self.revision += 1;

        let mut search = committed.clone();
        for filter in &self.filters {
            search.remove(&filter.query_param_name);
        }
        self.navigate(search);
    }

    pub fn is_search_filters_panel_open(&self) -> bool {
        self.has_secondary_filters() && self.is_search_filters_panel_open
    }

    pub fn toggle_search_filters_panel(&mut self, is_open: bool) {
        self.is_search_filters_panel_open = is_open;
    }

    /// Сортировка минует черновик: один параметр ставится или удаляется, затем навигация.
    pub fn sort_by(&mut self, committed: &QueryParams, param: &str, values: Option<String>) {
        let mut search = committed.clone();
        match values {
            Some(v) => {
                search.insert(param.to_string(), v);
            }
            None => {
                search.remove(param);
            }
        }
        self.navigate(search);
    }

    pub fn selected_filters_count(&self, committed: &QueryParams) -> usize {
        valid_filter_params(committed, &self.filters).len()
    }

    pub fn search_filters_panel_selected_count(&self, committed: &QueryParams) -> usize {
        let secondary: Vec<FilterConfig> = self.secondary_filters().cloned().collect();
        valid_filter_params(committed, &secondary).len()
    }

    pub fn is_conflicting_filter_active(&self, committed: &QueryParams) -> bool {
        find_active_filter(&self.sort.conflicting_filters, committed, &self.filters).is_some()
    }

    /// Sort control for the given URL; follows the conflicting filter on every change.
    pub fn sort_control(&self, committed: &QueryParams) -> Option<SortControlState> {
        sort_control_state(&self.sort, committed, self.is_conflicting_filter_active(committed))
    }

    fn navigate(&mut self, search: QueryParams) {
        log::debug!("search page navigate: {:?}", search);
        self.navigator.push(Location::search_page(search));
    }
}
