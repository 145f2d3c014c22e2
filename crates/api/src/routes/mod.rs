pub mod health;
pub mod objects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /objects                 list (paginated), create
/// /objects/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/objects", objects::router())
}
