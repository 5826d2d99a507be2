//! Repository for the `episodes` table.
//!
//! Implements the searchable, paginated episode listing: one count query,
//! one page query joined with `series`, and one batched query for the
//! videos of the episodes on the page.

use animelist_core::listing::{EpisodeFilter, PageRequest};
use animelist_core::pagination::Page;
use sqlx::PgPool;

use crate::models::episode::{EpisodeRow, EpisodeView};
use crate::repositories::episode_video_repo::{group_by_episode, EpisodeVideoRepo};

/// Columns selected for a listed episode, including its series name.
const COLUMNS: &str = "\
    e.id, e.series_id, e.title, e.episode_number, e.created_at, e.updated_at, \
    s.name AS series_name";

/// Episodes joined with their (mandatory) series.
const FROM_EPISODES: &str = "episodes e JOIN series s ON s.id = e.series_id";

/// Search predicate.
///
/// - `$1`: whether a search term was given; `false` disables filtering.
/// - `$2`: escaped `ILIKE` pattern, `NULL` when the term cannot occur in
///   any text column (so both substring branches match nothing).
/// - `$3`: search term as an episode number, `NULL` when non-numeric.
const SEARCH_PREDICATE: &str = "\
    (NOT $1::BOOLEAN \
     OR e.title ILIKE $2 ESCAPE '\\' \
     OR e.episode_number = $3 \
     OR s.name ILIKE $2 ESCAPE '\\')";

/// Newest episodes first; ids are unique so no tie-break is needed.
const ORDER_BY: &str = "e.id DESC";

/// Provides read access to episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Count the episodes matching `filter`.
    pub async fn count_matching(pool: &PgPool, filter: &EpisodeFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {FROM_EPISODES} WHERE {SEARCH_PREDICATE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(!filter.is_empty())
            .bind(filter.substring_pattern())
            .bind(filter.episode_number())
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of episodes matching `filter`, newest first.
    pub async fn list_rows(
        pool: &PgPool,
        filter: &EpisodeFilter,
        page: &PageRequest,
    ) -> Result<Vec<EpisodeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_EPISODES} \
             WHERE {SEARCH_PREDICATE} \
             ORDER BY {ORDER_BY} \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, EpisodeRow>(&query)
            .bind(!filter.is_empty())
            .bind(filter.substring_pattern())
            .bind(filter.episode_number())
            .bind(page.per_page())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// List one page of episodes with their series and videos attached.
    ///
    /// A page past the end yields an empty `data` list with the real
    /// `total`.
    pub async fn list_with_relations(
        pool: &PgPool,
        filter: &EpisodeFilter,
        page: &PageRequest,
    ) -> Result<Page<EpisodeView>, sqlx::Error> {
        let total = Self::count_matching(pool, filter).await?;

        let rows = if total > page.offset() {
            Self::list_rows(pool, filter, page).await?
        } else {
            Vec::new()
        };

        let episode_ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        let videos = EpisodeVideoRepo::list_for_episodes(pool, &episode_ids).await?;

        tracing::trace!(
            episodes = rows.len(),
            videos = videos.len(),
            "Loaded episode page relations",
        );

        let mut videos_by_episode = group_by_episode(videos);

        let listing = Page::new(rows, total, page);
        Ok(listing.map(|row| {
            let videos = videos_by_episode.remove(&row.id).unwrap_or_default();
            EpisodeView::from_row(row, videos)
        }))
    }
}
