use crate::search_page::helpers::SortControlState;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Контрол сортировки. Выбор сразу меняет URL, минуя черновик.
///
/// Рендерится заново на каждое изменение URL, так что `state` всегда
/// отражает текущий конфликтующий фильтр.
#[component]
pub fn SortBy(
    state: SortControlState,
    /// `(param, value)`
    on_select: Callback<(String, Option<String>)>,
    #[prop(optional)] mobile: bool,
) -> impl IntoView {
    let SortControlState {
        query_param_name,
        options,
        value,
    } = state;
    let select_value = RwSignal::new(value);

    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            let value = (!current.is_empty()).then(|| current.clone());
            on_select.run((query_param_name.clone(), value));
        }
        current
    });

    let class = if mobile { "sort-by sort-by--mobile" } else { "sort-by" };

    view! {
        <div class=class>
            {icon("sort")}
            <Select value=select_value size=SelectSize::Small>
                {options.into_iter().map(|o| view! {
                    <option value=o.key disabled=o.disabled>{o.label}</option>
                }).collect_view()}
            </Select>
        </div>
    }
}
