//! Concrete implementations of the port traits.

pub mod console_view_adapter;
pub mod csv_quote_adapter;
pub mod file_config_adapter;
pub mod orders_csv;
pub mod system_clock;
