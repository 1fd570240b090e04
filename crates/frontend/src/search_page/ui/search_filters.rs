use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Результаты поиска: "Найдено N" / "Поиск..."
fn results_label(listings_are_loaded: bool, search_in_progress: bool, results_count: usize) -> String {
    if search_in_progress || !listings_are_loaded {
        "Поиск...".to_string()
    } else if results_count == 0 {
        "Ничего не найдено".to_string()
    } else {
        format!("Найдено: {}", results_count)
    }
}

/// Панель фильтров над результатами. Дети - основные фильтры,
/// отсюда же открывается панель дополнительных.
#[component]
pub fn SearchFilters<S>(
    sort_by: S,
    #[prop(into)] results_count: Signal<usize>,
    #[prop(into)] listings_are_loaded: Signal<bool>,
    #[prop(into)] search_in_progress: Signal<bool>,
    #[prop(into)] search_listings_error: Signal<bool>,
    #[prop(into)] has_secondary_filters: Signal<bool>,
    #[prop(into)] is_search_filters_panel_open: Signal<bool>,
    #[prop(into)] search_filters_panel_selected_count: Signal<usize>,
    on_toggle_search_filters_panel: Callback<bool>,
    children: Children,
) -> impl IntoView
where
    S: Fn() -> AnyView + Send + Sync + 'static,
{
    let toggle_panel = move |_| {
        on_toggle_search_filters_panel.run(!is_search_filters_panel_open.get_untracked());
    };

    view! {
        <div class="search-filters">
            <div class="search-filters__filters">
                {children()}
                {move || has_secondary_filters.get().then(|| view! {
                    <Button
                        appearance=move || if is_search_filters_panel_open.get() {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                        on_click=toggle_panel
                    >
                        {icon("filter")}
                        "Ещё фильтры"
                        {move || {
                            let count = search_filters_panel_selected_count.get();
                            (count > 0).then(|| view! {
                                <span class="badge badge--primary">{count}</span>
                            })
                        }}
                    </Button>
                })}
            </div>
            <div class="search-filters__footer">
                <div class="search-filters__results">
                    {move || if search_listings_error.get() {
                        String::new()
                    } else {
                        results_label(listings_are_loaded.get(), search_in_progress.get(), results_count.get())
                    }}
                </div>
                {move || sort_by()}
            </div>
        </div>
    }
}

/// Modal sheet for small screens with every filter. Filters inside commit
/// on change, so there is no Apply here, only reset and close.
#[component]
pub fn SearchFiltersMobile<S>(
    sort_by: S,
    #[prop(into)] results_count: Signal<usize>,
    #[prop(into)] listings_are_loaded: Signal<bool>,
    #[prop(into)] search_in_progress: Signal<bool>,
    #[prop(into)] selected_filters_count: Signal<usize>,
    on_reset_all: Callback<()>,
    children: Children,
) -> impl IntoView
where
    S: Fn() -> AnyView + Send + Sync + 'static,
{
    let is_open = RwSignal::new(false);

    view! {
        <div class="search-filters-mobile">
            <div class="search-filters-mobile__bar">
                <div class="search-filters-mobile__results">
                    {move || results_label(listings_are_loaded.get(), search_in_progress.get(), results_count.get())}
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| is_open.set(true)
                >
                    {icon("filter")}
                    "Фильтры"
                    {move || {
                        let count = selected_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </Button>
                {move || sort_by()}
            </div>

            <div
                class="search-filters-mobile__modal"
                style=move || if is_open.get() { "display: block;" } else { "display: none;" }
            >
                <div class="search-filters-mobile__header">
                    <button
                        class="search-filters-mobile__close"
                        title="Закрыть"
                        on:click=move |_| is_open.set(false)
                    >
                        {icon("x")}
                    </button>
                    <span class="search-filters-mobile__title">"Фильтры"</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_reset_all.run(())
                    >
                        "Сбросить все"
                    </Button>
                </div>
                <div class="search-filters-mobile__content">
                    {children()}
                </div>
                <div class="search-filters-mobile__footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| is_open.set(false)
                    >
                        {move || format!("Показать результаты ({})", results_count.get())}
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Дополнительные фильтры. Изменения остаются в черновике до "Применить".
#[component]
pub fn SearchFiltersPanel(
    #[prop(into)] selected_count: Signal<usize>,
    on_apply: Callback<()>,
    on_cancel: Callback<()>,
    on_reset_all: Callback<()>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="search-filters-panel">
            <FilterPanel
                active_filters_count=selected_count
                on_apply=on_apply
                on_cancel=on_cancel
                on_reset=on_reset_all
                on_close=on_close
            >
                {children()}
            </FilterPanel>
        </div>
    }
}
