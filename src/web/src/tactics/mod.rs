pub mod board;
pub mod delete;
pub mod list;
pub mod save;
pub mod saver;

use crate::AppData;
use axum::Router;

pub fn tactic_routes() -> Router<AppData> {
    board::routes::routes()
        .merge(list::routes::routes())
        .merge(save::routes::routes())
        .merge(delete::routes::routes())
}
