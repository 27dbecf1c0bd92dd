//! Port traits for external collaborators.

pub mod clock_port;
pub mod config_port;
pub mod quote_port;
pub mod view_port;
