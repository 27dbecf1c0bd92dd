//! Core accounting model.

pub mod bar;
pub mod error;
pub mod portfolio;
pub mod position;
pub mod snapshot;
pub mod transaction;
