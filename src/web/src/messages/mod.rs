pub mod edit;
pub mod list;

use crate::AppData;
use axum::Router;

pub fn message_routes() -> Router<AppData> {
    list::routes::routes().merge(edit::routes::routes())
}
