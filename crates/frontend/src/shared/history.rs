//! Навигация для контроллера страницы поиска

use crate::routes::Location;
use contracts::search::QueryParams;
use leptos::prelude::*;

/// Заменяет query-строку URL целиком на переданную локацию.
pub trait Navigator {
    fn push(&mut self, location: Location);
}

/// `history.pushState` navigator. The reactive `url_query_params` signal is
/// updated with the pushed query so the page re-renders and re-searches.
#[derive(Clone, Copy)]
pub struct BrowserHistory {
    url_query_params: RwSignal<QueryParams>,
}

impl BrowserHistory {
    pub fn new(url_query_params: RwSignal<QueryParams>) -> Self {
        Self { url_query_params }
    }
}

impl Navigator for BrowserHistory {
    fn push(&mut self, location: Location) {
        let url = location.to_url();
        log::debug!("history.push {}", url);

        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|history| {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
            });
        if let Some(Err(err)) = pushed {
            log::warn!("pushState failed for {}: {:?}", url, err);
        }

        self.url_query_params.set(location.query);
    }
}
