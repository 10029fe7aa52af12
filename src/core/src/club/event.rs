use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Training,
    Match,
    Tournament,
    Meeting,
}

impl EventKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventKind::Training => "Training",
            EventKind::Match => "Match",
            EventKind::Tournament => "Tournament",
            EventKind::Meeting => "Meeting",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EventKind::Training => "event-training",
            EventKind::Match => "event-match",
            EventKind::Tournament => "event-tournament",
            EventKind::Meeting => "event-meeting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubEvent {
    pub id: u32,
    pub title: String,
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    pub team_slug: String,
}

/// Explicit form for creating or fully replacing a calendar event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    pub team_slug: String,
}
