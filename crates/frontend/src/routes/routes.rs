use crate::search_page::ui::SearchPage;
use contracts::search::QueryParams;
use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::shared::query_string::stringify_query_params;

/// Именованные маршруты приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    SearchPage,
}

impl RouteName {
    /// Path template, `:name` segments are filled from path params
    pub fn path_template(&self) -> &'static str {
        match self {
            RouteName::SearchPage => "/s",
        }
    }
}

/// Target of a navigation: route, path params and the complete query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: RouteName,
    pub path_params: BTreeMap<String, String>,
    pub query: QueryParams,
}

impl Location {
    pub fn search_page(query: QueryParams) -> Self {
        Self {
            route: RouteName::SearchPage,
            path_params: BTreeMap::new(),
            query,
        }
    }

    pub fn to_url(&self) -> String {
        create_resource_locator_string(self.route, &self.path_params, &self.query)
    }
}

/// Build `path?query` for a route. Unknown `:param` segments are kept as written.
pub fn create_resource_locator_string(
    route: RouteName,
    path_params: &BTreeMap<String, String>,
    query: &QueryParams,
) -> String {
    let path = route
        .path_template()
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => path_params
                .get(name)
                .map(String::as_str)
                .unwrap_or(segment),
            None => segment,
        })
        .collect::<Vec<_>>()
        .join("/");

    let search = stringify_query_params(query);
    if search.is_empty() {
        path
    } else {
        format!("{}?{}", path, search)
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    // Пока одна страница; query-строкой URL владеет страница поиска.
    view! { <SearchPage /> }
}
