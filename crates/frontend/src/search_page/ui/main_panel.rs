use super::filter_component::FilterComponent;
use super::search_filters::{SearchFilters, SearchFiltersMobile, SearchFiltersPanel};
use super::sort_by::SortBy;
use super::state::SearchController;
use crate::search_page::dispatcher::{FilterControl, FilterHost};
use crate::search_page::helpers::results_state;
use contracts::search::QueryParams;
use leptos::prelude::*;

/// MainPanel contains search results and filters.
///
/// Filters are shown by three containers: the inline `SearchFilters` bar
/// (primary filters as popups, live), `SearchFiltersMobile` (all filters,
/// live) and `SearchFiltersPanel` (secondary, buffered until Apply). While the
/// panel is open it takes the place of the listings.
#[component]
pub fn MainPanel(
    controller: RwSignal<SearchController>,
    #[prop(into)] url_query_params: Signal<QueryParams>,
    #[prop(into)] search_in_progress: Signal<bool>,
    #[prop(into)] search_listings_error: Signal<bool>,
    #[prop(into)] search_params_are_in_sync: Signal<bool>,
    /// Всего по пагинации, `None` пока не пришла первая страница
    #[prop(into)]
    total_items: Signal<Option<usize>>,
    /// Список объявлений
    children: ChildrenFn,
) -> impl IntoView {
    let results = Memo::new(move |_| {
        results_state(
            search_in_progress.get(),
            search_params_are_in_sync.get(),
            total_items.get(),
        )
    });
    let listings_are_loaded = Signal::derive(move || results.get().listings_are_loaded);
    let results_count = Signal::derive(move || results.get().results_count);

    let selected_filters_count = Signal::derive(move || {
        let params = url_query_params.get();
        controller.with(|c| c.selected_filters_count(&params))
    });
    let search_filters_panel_selected_count = Signal::derive(move || {
        let params = url_query_params.get();
        controller.with(|c| c.search_filters_panel_selected_count(&params))
    });
    let has_secondary_filters = Signal::derive(move || controller.with(|c| c.has_secondary_filters()));
    let is_search_filters_panel_open =
        Signal::derive(move || controller.with(|c| c.is_search_filters_panel_open()));

    let on_toggle_search_filters_panel = Callback::new(move |is_open: bool| {
        controller.update(|c| c.toggle_search_filters_panel(is_open));
    });
    let on_sort_by = Callback::new(move |(param, values): (String, Option<String>)| {
        let committed = url_query_params.get_untracked();
        controller.update(|c| c.sort_by(&committed, &param, values));
    });
    let on_apply = Callback::new(move |_: ()| {
        let committed = url_query_params.get_untracked();
        controller.update(|c| {
            c.apply_filters(&committed);
            c.toggle_search_filters_panel(false);
        });
    });
    let on_cancel = Callback::new(move |_: ()| {
        controller.update(|c| {
            c.cancel_filters();
            c.toggle_search_filters_panel(false);
        });
    });
    let on_reset_all = Callback::new(move |_: ()| {
        let committed = url_query_params.get_untracked();
        controller.update(|c| c.reset_all(&committed));
    });
    let on_close_panel = Callback::new(move |_: ()| {
        controller.update(|c| c.toggle_search_filters_panel(false));
    });

    // Зависит от URL: конфликт и выбранная опция меняются вместе с ним
    let sort_by = move |mobile: bool| {
        let params = url_query_params.get();
        match controller.with(|c| c.sort_control(&params)) {
            Some(state) => view! {
                <SortBy state=state on_select=on_sort_by mobile=mobile />
            }
            .into_any(),
            None => view! { <></> }.into_any(),
        }
    };

    // Keyed by id and controller revision: a live commit keeps the mounted
    // control (open popup, focused input), reset and history moves rebuild it.
    let filters_for = move |host: FilterHost| {
        view! {
            <For
                each=move || {
                    let params = url_query_params.get();
                    controller.with(|c| c.controls_for(host, &params))
                }
                key=|control: &FilterControl| (control.component_id.clone(), control.revision)
                children=move |control: FilterControl| view! {
                    <FilterComponent
                        control=control
                        controller=controller
                        url_query_params=url_query_params
                        show_as_popup=host.show_as_popup()
                    />
                }
            />
        }
    };

    view! {
        <div class="search-result-container">
            <SearchFilters
                sort_by=move || sort_by(false)
                results_count=results_count
                listings_are_loaded=listings_are_loaded
                search_in_progress=search_in_progress
                search_listings_error=search_listings_error
                has_secondary_filters=has_secondary_filters
                is_search_filters_panel_open=is_search_filters_panel_open
                search_filters_panel_selected_count=search_filters_panel_selected_count
                on_toggle_search_filters_panel=on_toggle_search_filters_panel
            >
                {filters_for(FilterHost::SearchFilters)}
            </SearchFilters>

            <SearchFiltersMobile
                sort_by=move || sort_by(true)
                results_count=results_count
                listings_are_loaded=listings_are_loaded
                search_in_progress=search_in_progress
                selected_filters_count=selected_filters_count
                on_reset_all=on_reset_all
            >
                {filters_for(FilterHost::SearchFiltersMobile)}
            </SearchFiltersMobile>

            {move || if is_search_filters_panel_open.get() {
                view! {
                    <SearchFiltersPanel
                        selected_count=search_filters_panel_selected_count
                        on_apply=on_apply
                        on_cancel=on_cancel
                        on_reset_all=on_reset_all
                        on_close=on_close_panel
                    >
                        {filters_for(FilterHost::SearchFiltersPanel)}
                    </SearchFiltersPanel>
                }.into_any()
            } else {
                let children = children.clone();
                view! {
                    <div class=move || if listings_are_loaded.get() {
                        "listings"
                    } else {
                        "listings listings--new-search-in-progress"
                    }>
                        {move || search_listings_error.get().then(|| view! {
                            <h2 class="alert alert--error">
                                "Не удалось выполнить поиск. Попробуйте еще раз."
                            </h2>
                        })}
                        {children()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
