pub mod episodes;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /episodes                                        paginated, searchable listing
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/episodes", episodes::router())
}
