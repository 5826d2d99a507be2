//! Handlers for the episode listing.

use animelist_core::listing::{EpisodeFilter, PageRequest};
use animelist_db::models::episode::{EpisodeListing, ListingFilters};
use animelist_db::repositories::EpisodeRepo;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::EpisodeListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/episodes
///
/// One page (15 items) of episodes, newest first, each with its series and
/// video sources. `search` narrows the list to episodes whose title or
/// series name contains it, or whose episode number equals it. The search
/// term is echoed back under `filters` so the client can restore its input.
pub async fn list_episodes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = EpisodeListParams::from_pairs(pairs);
    let filter = EpisodeFilter::from_search(params.search.as_deref());
    let page = PageRequest::from_param(params.page.as_deref());

    let episodes = EpisodeRepo::list_with_relations(&state.pool, &filter, &page).await?;

    tracing::debug!(
        search = ?filter.search(),
        page = page.page(),
        total = episodes.total,
        "Episodes listed",
    );

    let listing = EpisodeListing {
        episodes,
        filters: ListingFilters {
            search: filter.search().unwrap_or_default().to_string(),
        },
    };

    Ok(Json(DataResponse { data: listing }))
}
