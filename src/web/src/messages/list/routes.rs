use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/messages", get(super::messages_page_action))
        .route("/api/messages", get(super::messages_api_action))
}
