use crate::AppData;
use axum::routing::{post, put};
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/players", post(super::player_create_action))
        .route(
            "/api/players/{id}",
            put(super::player_update_action).delete(super::player_delete_action),
        )
}
