use crate::AppData;
use axum::routing::delete;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/tactics/{id}", delete(super::tactic_delete_action))
}
