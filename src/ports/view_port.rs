//! Presentation port trait.

use crate::domain::portfolio::Portfolio;
use crate::domain::snapshot::Snapshot;

/// Display-only collaborator. Consumes entity snapshots; the exact text
/// layout is not part of the accounting contract.
pub trait ViewPort {
    fn render(&self, snapshot: &Snapshot) -> String;

    fn summarize(&self, portfolio: &Portfolio) -> String;
}
