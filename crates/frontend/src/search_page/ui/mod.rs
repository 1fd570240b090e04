pub mod filter_component;
pub mod main_panel;
pub mod page;
pub mod search_filters;
pub mod sort_by;
pub mod state;
pub mod widgets;

pub use page::SearchPage;
