//! Route definitions for the episode listing.
//!
//! Mounted at `/episodes` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::episodes;
use crate::state::AppState;

/// Episode routes mounted at `/episodes`.
///
/// ```text
/// GET    /                      -> list_episodes (?search=&page=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(episodes::list_episodes))
}
