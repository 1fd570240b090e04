//! Search page contracts: filter and sort configuration shared by the UI.

pub mod error;
pub mod filter_config;
pub mod page_config;
pub mod sort_config;

use std::collections::BTreeMap;

pub use error::FilterConfigError;
pub use filter_config::{
    FilterConfig, FilterGroup, FilterKind, PriceConfig, RawFilterConfig, SearchMode,
    SelectConfig, SelectMultipleConfig, SelectOption,
};
pub use page_config::{load_search_page_config, SearchPageConfig, DEFAULT_SEARCH_PAGE_CONFIG};
pub use sort_config::{SortConfig, SortOption};

/// URL query parameters: param name -> value.
///
/// Ordered so that serialized URLs are stable.
pub type QueryParams = BTreeMap<String, String>;
