pub mod routes;

pub use routes::home_routes;

use crate::views::{self, MenuSection};
use crate::{ApiResult, AppData};
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use pitchside_core::utils::DateUtils;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub css_version: &'static str,
    pub menu_sections: Vec<MenuSection>,
    pub team_count: usize,
    pub player_count: usize,
    pub event_count: usize,
    pub upcoming: Vec<UpcomingEvent>,
}

pub struct UpcomingEvent {
    pub title: String,
    pub when: String,
    pub location: String,
    pub kind_class: String,
}

pub async fn home_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.club.read().await;

    let events = guard.events(None);

    let upcoming = events
        .iter()
        .take(5)
        .map(|event| UpcomingEvent {
            title: event.title.clone(),
            when: DateUtils::format_timestamp(event.starts_at),
            location: event.location.clone(),
            kind_class: event.kind.css_class().to_string(),
        })
        .collect();

    Ok(HomeTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        menu_sections: views::main_menu("/"),
        team_count: guard.team_slugs().len(),
        player_count: guard.players(None).len(),
        event_count: events.len(),
        upcoming,
    })
}
