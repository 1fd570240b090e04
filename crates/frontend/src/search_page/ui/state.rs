use crate::search_page::controller::PanelController;
use crate::shared::history::BrowserHistory;
use contracts::search::{QueryParams, SearchPageConfig};
use leptos::prelude::*;

pub type SearchController = PanelController<BrowserHistory>;

pub fn create_controller(
    config: SearchPageConfig,
    url_query_params: RwSignal<QueryParams>,
) -> RwSignal<SearchController> {
    RwSignal::new(PanelController::new(
        config,
        BrowserHistory::new(url_query_params),
    ))
}
