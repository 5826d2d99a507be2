//! Episode model, listing view and listing payload.

use animelist_core::pagination::Page;
use animelist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::episode_video::EpisodeVideo;
use crate::models::series::SeriesSummary;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// An `episodes` row joined with the name of its series.
#[derive(Debug, Clone, FromRow)]
pub struct EpisodeRow {
    pub id: DbId,
    pub series_id: DbId,
    pub title: String,
    pub episode_number: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub series_name: String,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// An episode with its series and video sources attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeView {
    pub id: DbId,
    pub series_id: DbId,
    pub title: String,
    pub episode_number: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub series: SeriesSummary,
    pub videos: Vec<EpisodeVideo>,
}

impl EpisodeView {
    pub fn from_row(row: EpisodeRow, videos: Vec<EpisodeVideo>) -> Self {
        Self {
            id: row.id,
            series_id: row.series_id,
            title: row.title,
            episode_number: row.episode_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
            series: SeriesSummary {
                id: row.series_id,
                name: row.series_name,
            },
            videos,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing payload
// ---------------------------------------------------------------------------

/// Filters echoed back alongside a listing so the client can restore its
/// search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingFilters {
    /// Trimmed search term, or an empty string when none was given.
    pub search: String,
}

/// Payload for the episode listing page.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeListing {
    pub episodes: Page<EpisodeView>,
    pub filters: ListingFilters,
}
