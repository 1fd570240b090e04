use super::main_panel::MainPanel;
use super::state::create_controller;
use crate::search_page::helpers::valid_filter_params;
use crate::shared::query_string::current_query_params;
use anyhow::Context;
use contracts::search::{load_search_page_config, QueryParams, SearchPageConfig, DEFAULT_SEARCH_PAGE_CONFIG};
use leptos::prelude::*;

fn load_page_config() -> anyhow::Result<SearchPageConfig> {
    load_search_page_config(DEFAULT_SEARCH_PAGE_CONFIG).context("loading search page config")
}

/// Страница поиска (/s)
///
/// The URL query is the source of truth: it is read on mount and on
/// `popstate`, and every navigation from the controller writes it back.
/// Result signals default to "loaded, nothing found" when the page is
/// mounted without a search backend.
#[component]
pub fn SearchPage(
    /// Вызывается с валидными параметрами фильтров (и сортировкой) при смене URL
    #[prop(optional)]
    on_search: Option<Callback<QueryParams>>,
    #[prop(optional, into)] search_in_progress: Option<Signal<bool>>,
    #[prop(optional, into)] search_listings_error: Option<Signal<bool>>,
    #[prop(optional, into)] search_params_are_in_sync: Option<Signal<bool>>,
    #[prop(optional, into)] total_items: Option<Signal<Option<usize>>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let config = match load_page_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            return view! {
                <div class="search-page">
                    <h2 class="alert alert--error">"Не удалось загрузить настройки поиска"</h2>
                </div>
            }
            .into_any();
        }
    };

    let filters = StoredValue::new(config.filters.clone());
    let sort_param = config.sort.query_param_name.clone();

    let url_query_params = RwSignal::new(current_query_params());
    let controller = create_controller(config, url_query_params);

    // Назад/вперёд в браузере: черновик сбрасывается, контролы перечитывают URL
    let listener = window_event_listener(leptos::ev::popstate, move |_| {
        controller.update(|c| c.sync_from_history());
        url_query_params.set(current_query_params());
    });
    on_cleanup(move || listener.remove());

    Effect::new(move |prev: Option<QueryParams>| {
        let params = url_query_params.get();
        if prev.as_ref() != Some(&params) {
            let mut search = filters.with_value(|f| valid_filter_params(&params, f));
            if let Some(sort) = params.get(&sort_param) {
                search.insert(sort_param.clone(), sort.clone());
            }
            log::debug!("search params changed: {:?}", search);
            if let Some(on_search) = on_search {
                on_search.run(search);
            }
        }
        params
    });

    let search_in_progress = search_in_progress.unwrap_or_else(|| Signal::derive(|| false));
    let search_listings_error = search_listings_error.unwrap_or_else(|| Signal::derive(|| false));
    let search_params_are_in_sync =
        search_params_are_in_sync.unwrap_or_else(|| Signal::derive(|| true));
    let total_items = total_items.unwrap_or_else(|| Signal::derive(|| Some(0)));

    view! {
        <div class="search-page">
            <MainPanel
                controller=controller
                url_query_params=url_query_params
                search_in_progress=search_in_progress
                search_listings_error=search_listings_error
                search_params_are_in_sync=search_params_are_in_sync
                total_items=total_items
            >
                {children.as_ref().map(|children| children())}
            </MainPanel>
        </div>
    }
    .into_any()
}
