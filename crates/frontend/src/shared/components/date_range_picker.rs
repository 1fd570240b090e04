use crate::search_page::codec::DateRange;
use crate::shared::date_utils::{parse_date_from_iso8601, stringify_date_to_iso8601};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// Первый и последний день месяца
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((month_start, next_month_start - Duration::days(1)))
}

/// Следующий месяц после месяца `date`
pub fn next_month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    if date.month() == 12 {
        month_bounds(date.year() + 1, 1)
    } else {
        month_bounds(date.year(), date.month() + 1)
    }
}

/// DateRangePicker - два поля дат и кнопки быстрого выбора периода.
/// Любая граница может быть пустой; полнота диапазона проверяется вызывающим.
#[component]
pub fn DateRangePicker(
    #[prop(into)]
    value: Signal<DateRange>,

    /// Callback при изменении диапазона
    on_change: Callback<DateRange>,
) -> impl IntoView {
    let date_value = move |date: Option<NaiveDate>| {
        date.map(stringify_date_to_iso8601).unwrap_or_default()
    };

    let on_start_change = move |raw: String| {
        let current = value.get_untracked();
        on_change.run(DateRange {
            start: parse_date_from_iso8601(&raw),
            end: current.end,
        });
    };

    let on_end_change = move |raw: String| {
        let current = value.get_untracked();
        on_change.run(DateRange {
            start: current.start,
            end: parse_date_from_iso8601(&raw),
        });
    };

    let on_next_week = move |_| {
        let today = Utc::now().date_naive();
        on_change.run(DateRange::new(today, today + Duration::days(7)));
    };

    let on_next_month = move |_| {
        if let Some((start, end)) = next_month_bounds(Utc::now().date_naive()) {
            on_change.run(DateRange::new(start, end));
        }
    };

    let on_clear = move |_| {
        on_change.run(DateRange::default());
    };

    view! {
        <style>
            "
            .date-range-picker {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                min-height: 32px;
            }

            .date-range-picker:focus-within {
                border-color: var(--colorBrandStroke1, var(--color-primary, #3b82f6));
            }

            .date-range-picker input[type=\"date\"] {
                box-sizing: border-box;
                background: transparent;
                border: none;
                padding: 0px 12px;
                font-size: 0.875rem;
                width: 130px;
                cursor: pointer;
            }

            .date-range-picker input[type=\"date\"]:focus {
                outline: none;
            }
            "
        </style>

        <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
            <input
                type="date"
                prop:value=move || date_value(value.get().start)
                on:input=move |ev| on_start_change(event_target_value(&ev))
            />

            <div>"—"</div>

            <input
                type="date"
                prop:value=move || date_value(value.get().end)
                on:input=move |ev| on_end_change(event_target_value(&ev))
            />

            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_next_week
                >
                    "+7Д"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_next_month
                >
                    "+1М"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_clear
                >
                    "✕"
                </Button>
            </ButtonGroup>
        </Flex>
    }
}
