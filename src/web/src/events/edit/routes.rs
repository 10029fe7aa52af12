use crate::AppData;
use axum::routing::{post, put};
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/events", post(super::event_create_action))
        .route(
            "/api/events/{id}",
            put(super::event_update_action).delete(super::event_delete_action),
        )
}
