pub mod routes;

use crate::views::{self, MenuSection};
use crate::{ApiResult, AppData};
use askama::Template;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::utils::DateUtils;
use pitchside_core::ClubEvent;
use itertools::Itertools;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EventListQuery {
    pub team: Option<String>,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "events/index.html")]
pub struct EventsTemplate {
    pub css_version: &'static str,
    pub menu_sections: Vec<MenuSection>,
    pub teams: Vec<String>,
    pub selected_team: String,
    pub days: Vec<EventDay>,
}

pub struct EventDay {
    pub label: String,
    pub events: Vec<EventRow>,
}

pub struct EventRow {
    pub id: u32,
    pub time: String,
    pub title: String,
    pub kind: String,
    pub kind_class: String,
    pub location: String,
    pub notes: String,
    pub team: String,
}

pub async fn events_page_action(
    State(state): State<AppData>,
    Query(query): Query<EventListQuery>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.club.read().await;

    // events come pre-sorted by start time, so a single pass groups them
    // into calendar days
    let grouped = guard
        .events(query.team.as_deref())
        .into_iter()
        .chunk_by(|event| event.starts_at.date());

    let mut days = Vec::new();

    for (_, events) in &grouped {
        let events: Vec<&ClubEvent> = events.collect();

        days.push(EventDay {
            label: DateUtils::format_event_day(events[0].starts_at),
            events: events
                .into_iter()
                .map(|event| EventRow {
                    id: event.id,
                    time: DateUtils::format_event_time(event.starts_at),
                    title: event.title.clone(),
                    kind: event.kind.display_name().to_string(),
                    kind_class: event.kind.css_class().to_string(),
                    location: event.location.clone(),
                    notes: event.notes.clone(),
                    team: event.team_slug.clone(),
                })
                .collect(),
        });
    }

    Ok(EventsTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        menu_sections: views::main_menu("/events"),
        teams: guard.team_slugs(),
        selected_team: query.team.unwrap_or_default(),
        days,
    })
}

pub async fn events_api_action(
    State(state): State<AppData>,
    Query(query): Query<EventListQuery>,
) -> ApiResult<Json<Vec<ClubEvent>>> {
    let guard = state.club.read().await;

    let events = guard
        .events(query.team.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(events))
}
