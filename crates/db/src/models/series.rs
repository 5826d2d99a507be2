//! Series model.

use animelist_core::types::DbId;
use serde::Serialize;

/// The part of a `series` row embedded in every listed episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesSummary {
    pub id: DbId,
    pub name: String,
}
