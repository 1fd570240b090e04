pub mod components;
pub mod date_utils;
pub mod history;
pub mod icons;
pub mod query_string;
