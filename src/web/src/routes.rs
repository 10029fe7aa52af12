use crate::common::default_handler::default_handler;
use crate::events::event_routes;
use crate::home::home_routes;
use crate::messages::message_routes;
use crate::players::player_routes;
use crate::tactics::tactic_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(home_routes())
            .merge(player_routes())
            .merge(event_routes())
            .merge(message_routes())
            .merge(tactic_routes())
            .fallback(default_handler)
    }
}
