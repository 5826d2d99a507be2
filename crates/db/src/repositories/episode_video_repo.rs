//! Repository for the `episode_videos` table.

use std::collections::HashMap;

use animelist_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode_video::EpisodeVideo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, episode_id, server_name, url, quality, created_at, updated_at";

/// Provides read access to episode video sources.
pub struct EpisodeVideoRepo;

impl EpisodeVideoRepo {
    /// Load the videos of every episode in `episode_ids` with a single query.
    ///
    /// Rows are ordered by episode, then by video id.
    pub async fn list_for_episodes(
        pool: &PgPool,
        episode_ids: &[DbId],
    ) -> Result<Vec<EpisodeVideo>, sqlx::Error> {
        if episode_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM episode_videos \
             WHERE episode_id = ANY($1) \
             ORDER BY episode_id, id"
        );
        sqlx::query_as::<_, EpisodeVideo>(&query)
            .bind(episode_ids)
            .fetch_all(pool)
            .await
    }
}

/// Bucket videos by the episode they belong to, preserving row order.
pub fn group_by_episode(videos: Vec<EpisodeVideo>) -> HashMap<DbId, Vec<EpisodeVideo>> {
    let mut grouped: HashMap<DbId, Vec<EpisodeVideo>> = HashMap::new();
    for video in videos {
        grouped.entry(video.episode_id).or_default().push(video);
    }
    grouped
}
