use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/tactics", get(super::tactics_list_action))
        .route("/api/tactics/{id}", get(super::tactic_get_action))
}
