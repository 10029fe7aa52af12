use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub number: u8,
    pub position: String,
    pub team: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Vec<PlayerEntity> {
        serde_json::from_str(super::seed_file("players.json")).unwrap()
    }
}
