use super::state::SearchController;
use super::widgets::{
    DateRangeFilter, FilterPlain, FilterPopup, KeywordFilter, PriceFilter, SelectMultipleFilter,
    SelectSingleFilter,
};
use crate::search_page::codec::{
    DateRange, DateRangeCodec, KeywordCodec, PriceRange, PriceRangeCodec, QueryParamCodec,
    SelectSingleCodec,
};
use crate::search_page::dispatcher::{FilterControl, FilterWidget};
use contracts::search::QueryParams;
use leptos::prelude::*;

/// Change callback for one control: format the value with the filter's codec
/// and hand it to the controller, which decides between draft and navigation.
fn changed_value_handler<T, F>(
    controller: RwSignal<SearchController>,
    url_query_params: Signal<QueryParams>,
    param: String,
    use_history_push: bool,
    format: F,
) -> Callback<Option<T>>
where
    T: 'static,
    F: Fn(&T) -> Option<String> + Send + Sync + 'static,
{
    Callback::new(move |value: Option<T>| {
        let committed = url_query_params.get_untracked();
        controller.update(|c| {
            c.handle_changed_value(&committed, &param, value.as_ref(), use_history_push, &format)
        });
    })
}

/// Рендерит контрол, выбранный диспетчером.
#[component]
pub fn FilterComponent(
    control: FilterControl,
    controller: RwSignal<SearchController>,
    #[prop(into)] url_query_params: Signal<QueryParams>,
    show_as_popup: bool,
) -> impl IntoView {
    let FilterControl {
        component_id,
        name,
        label,
        query_param_name,
        use_history_push,
        widget,
        ..
    } = control;

    let active_param = query_param_name.clone();
    let is_active = Signal::derive(move || url_query_params.with(|p| p.contains_key(&active_param)));
    let param = query_param_name;

    let body = match widget {
        FilterWidget::Keyword { initial } => view! {
            <KeywordFilter
                name=name
                initial=initial
                on_submit=changed_value_handler(
                    controller, url_query_params, param, use_history_push,
                    |v: &String| KeywordCodec.format(v),
                )
            />
        }
        .into_any(),
        FilterWidget::SelectSingle { options, initial } => view! {
            <SelectSingleFilter
                options=options
                initial=initial
                on_select=changed_value_handler(
                    controller, url_query_params, param, use_history_push,
                    |v: &String| SelectSingleCodec.format(v),
                )
            />
        }
        .into_any(),
        FilterWidget::SelectMultiple { options, codec, initial } => view! {
            <SelectMultipleFilter
                name=name
                options=options
                initial=initial
                on_submit=changed_value_handler(
                    controller, url_query_params, param, use_history_push,
                    move |v: &Vec<String>| codec.format(v),
                )
            />
        }
        .into_any(),
        FilterWidget::DateRange { initial } => view! {
            <DateRangeFilter
                initial=initial
                on_submit=changed_value_handler(
                    controller, url_query_params, param, use_history_push,
                    |v: &DateRange| DateRangeCodec.format(v),
                )
            />
        }
        .into_any(),
        FilterWidget::Price { config, initial } => view! {
            <PriceFilter
                config=config
                initial=initial
                on_submit=changed_value_handler(
                    controller, url_query_params, param, use_history_push,
                    |v: &PriceRange| PriceRangeCodec.format(v),
                )
            />
        }
        .into_any(),
    };

    if show_as_popup {
        view! {
            <FilterPopup id=component_id label=label is_active=is_active>
                {body}
            </FilterPopup>
        }
        .into_any()
    } else {
        view! {
            <FilterPlain id=component_id label=label>
                {body}
            </FilterPlain>
        }
        .into_any()
    }
}
