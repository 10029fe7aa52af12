use crate::AppData;
use axum::routing::{delete, post};
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/messages", post(super::message_post_action))
        .route("/api/messages/{id}", delete(super::message_delete_action))
}
