pub mod date_range_picker;
pub mod filter_panel;
