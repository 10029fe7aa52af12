use crate::AppData;
use axum::routing::{post, put};
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/tactics", post(super::tactic_create_action))
        .route("/api/tactics/{id}", put(super::tactic_update_action))
}
