use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/events", get(super::events_page_action))
        .route("/api/events", get(super::events_api_action))
}
