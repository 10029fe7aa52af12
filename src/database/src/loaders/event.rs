use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EventEntity {
    pub id: u32,
    pub title: String,
    pub kind: String,
    pub starts_at: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    pub team: String,
}

pub struct EventLoader;

impl EventLoader {
    pub fn load() -> Vec<EventEntity> {
        serde_json::from_str(super::seed_file("events.json")).unwrap()
    }
}
