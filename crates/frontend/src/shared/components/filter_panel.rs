use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FilterPanel - панель дополнительных фильтров с кнопками
/// "Применить" / "Отмена" / "Сбросить все".
///
/// Изменения внутри копятся в черновике до "Применить", "Отмена" их отбрасывает.
#[component]
pub fn FilterPanel(
    /// Количество активных фильтров панели (для бейджа)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_apply: Callback<()>,
    on_cancel: Callback<()>,
    on_reset: Callback<()>,
    on_close: Callback<()>,

    /// Содержимое панели (поля фильтров)
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_reset.run(())
                    >
                        "Сбросить все"
                    </Button>
                    <button
                        class="filter-panel__close"
                        title="Закрыть"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
            </div>

            <div class="filter-panel-content">
                {children()}
            </div>

            <div class="filter-panel-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_apply.run(())
                >
                    "Применить"
                </Button>
            </div>
        </div>
    }
}
