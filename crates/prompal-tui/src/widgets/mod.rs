//! Ratatui widgets for the prompal picker.

pub mod help;
pub mod query_bar;
pub mod result_list;
pub mod suggestion_list;
