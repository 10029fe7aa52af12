use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/players", get(super::players_page_action))
        .route("/api/players", get(super::players_api_action))
}
