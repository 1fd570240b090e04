//! Filter widgets. Each one reports a typed value through its callback;
//! `None` means "clear this filter".

use crate::search_page::codec::{DateRange, PriceRange};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::icons::icon;
use contracts::search::{PriceConfig, SelectOption};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

const KEYWORD_DEBOUNCE_MS: u32 = 300;

/// Выпадающая обёртка для панели фильтров над результатами
#[component]
pub fn FilterPopup(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] is_active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let class = move || {
        if is_active.get() {
            "filter-popup__label filter-popup__label--active"
        } else {
            "filter-popup__label"
        }
    };

    view! {
        <div class="filter-popup" id=id>
            <button class=class on:click=move |_| open.update(|o| *o = !*o)>
                <span>{label}</span>
                {icon("chevron-down")}
            </button>
            <div
                class="filter-popup__content"
                style=move || if open.get() { "display: block;" } else { "display: none;" }
            >
                {children()}
            </div>
        </div>
    }
}

/// Секция с подписью для мобильного окна и панели дополнительных фильтров
#[component]
pub fn FilterPlain(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-plain" id=id>
            <Label>{label}</Label>
            <div class="filter-plain__content">{children()}</div>
        </div>
    }
}

#[component]
pub fn KeywordFilter(
    #[prop(into)] name: String,
    initial: Option<String>,
    on_submit: Callback<Option<String>>,
) -> impl IntoView {
    let text = RwSignal::new(initial.unwrap_or_default());
    let generation = StoredValue::new(0u32);

    // Debounce: отправляется только последнее изменение в окне
    Effect::new(move |prev: Option<String>| {
        let current = text.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            let my_generation = generation.get_value().wrapping_add(1);
            generation.set_value(my_generation);
            let value = current.trim().to_string();
            spawn_local(async move {
                TimeoutFuture::new(KEYWORD_DEBOUNCE_MS).await;
                if generation.try_get_value() == Some(my_generation) {
                    on_submit.run(Some(value));
                }
            });
        }
        current
    });

    view! {
        <div class="keyword-filter">
            {icon("search")}
            <Input
                value=text
                placeholder="Поиск..."
                attr:name=name
            />
        </div>
    }
}

#[component]
pub fn SelectSingleFilter(
    options: Vec<SelectOption>,
    initial: Option<String>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let select_value = RwSignal::new(initial.unwrap_or_default());

    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            on_select.run(Some(current.clone()));
        }
        current
    });

    view! {
        <Select value=select_value size=SelectSize::Small>
            <option value="">"Все"</option>
            {options.into_iter().map(|o| view! {
                <option value=o.key>{o.label}</option>
            }).collect_view()}
        </Select>
    }
}

#[component]
pub fn SelectMultipleFilter(
    #[prop(into)] name: String,
    options: Vec<SelectOption>,
    initial: Vec<String>,
    on_submit: Callback<Option<Vec<String>>>,
) -> impl IntoView {
    let selected = RwSignal::new(initial.into_iter().collect::<HashSet<String>>());
    let option_keys: Vec<String> = options.iter().map(|o| o.key.clone()).collect();

    Effect::new(move |prev: Option<HashSet<String>>| {
        let current = selected.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            // Порядок опций в URL как в конфигурации
            let ordered: Vec<String> = option_keys
                .iter()
                .filter(|key| current.contains(*key))
                .cloned()
                .collect();
            on_submit.run(Some(ordered));
        }
        current
    });

    view! {
        <CheckboxGroup value=selected>
            <div class="select-multiple-filter" data-name=name>
                {options.into_iter().map(|o| view! {
                    <Checkbox value=o.key label=o.label />
                }).collect_view()}
            </div>
        </CheckboxGroup>
    }
}

#[component]
pub fn DateRangeFilter(
    initial: Option<DateRange>,
    on_submit: Callback<Option<DateRange>>,
) -> impl IntoView {
    let range = RwSignal::new(initial.unwrap_or_default());

    // Неполный диапазон не уходит в URL, пока не выбрана вторая дата
    let on_change = Callback::new(move |next: DateRange| {
        range.set(next);
        if next.is_complete() {
            on_submit.run(Some(next));
        } else if next.start.is_none() && next.end.is_none() {
            on_submit.run(None);
        }
    });

    view! {
        <DateRangePicker value=range on_change=on_change />
    }
}

/// Range typed into the price inputs, clamped into the configured bounds.
/// Blank or non-numeric fields stay unset.
pub fn price_range_from_inputs(min: &str, max: &str, config: &PriceConfig) -> PriceRange {
    let clamp = |raw: &str| {
        raw.trim()
            .parse::<i64>()
            .ok()
            .map(|v| v.clamp(config.min, config.max))
    };
    PriceRange {
        min_price: clamp(min),
        max_price: clamp(max),
    }
}

#[component]
pub fn PriceFilter(
    config: PriceConfig,
    initial: Option<PriceRange>,
    on_submit: Callback<Option<PriceRange>>,
) -> impl IntoView {
    let initial = initial.unwrap_or(PriceRange::new(config.min, config.max));
    let bound_text = |bound: Option<i64>| bound.map(|v| v.to_string()).unwrap_or_default();
    let min_value = RwSignal::new(bound_text(initial.min_price));
    let max_value = RwSignal::new(bound_text(initial.max_price));

    let on_apply = move |_| {
        let range = price_range_from_inputs(&min_value.get_untracked(), &max_value.get_untracked(), &config);
        on_submit.run(Some(range));
    };

    let on_clear = move |_| {
        min_value.set(config.min.to_string());
        max_value.set(config.max.to_string());
        on_submit.run(None);
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Input
                    input_type=InputType::Number
                    value=min_value
                    attr:min=config.min.to_string()
                    attr:max=config.max.to_string()
                    attr:step=config.step.to_string()
                />
                <div>"—"</div>
                <Input
                    input_type=InputType::Number
                    value=max_value
                    attr:min=config.min.to_string()
                    attr:max=config.max.to_string()
                    attr:step=config.step.to_string()
                />
            </Flex>
            <Flex gap=FlexGap::Small>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_clear
                >
                    "Очистить"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=on_apply
                >
                    "Применить"
                </Button>
            </Flex>
        </Flex>
    }
}
