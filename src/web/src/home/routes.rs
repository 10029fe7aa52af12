use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn home_routes() -> Router<AppData> {
    Router::new().route("/", get(super::home_action))
}
