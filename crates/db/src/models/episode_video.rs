//! Episode video source model.

use animelist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `episode_videos` table.
///
/// The source fields are passed through to clients untouched.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EpisodeVideo {
    pub id: DbId,
    pub episode_id: DbId,
    pub server_name: String,
    pub url: String,
    pub quality: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
