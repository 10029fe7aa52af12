use crate::generators::RosterGenerator;
use crate::DatabaseEntity;
use core::shared::FullName;
use core::{ClubEvent, ClubState, EventKind, PitchMode, PlayerPosition, RosterPlayer};
use log::warn;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the runtime club state from embedded seed data. Teams with
    /// fewer players than a full football lineup are topped up with
    /// generated demo players so the tactics board always has a complete
    /// squad to place.
    pub fn generate(database: &DatabaseEntity) -> ClubState {
        let mut players: Vec<RosterPlayer> = database
            .players
            .iter()
            .filter_map(|entity| {
                let Some(position) = PlayerPosition::from_short_name(&entity.position) else {
                    warn!(
                        "skipping seed player {}: unknown position {}",
                        entity.id, entity.position
                    );
                    return None;
                };

                Some(RosterPlayer {
                    id: entity.id,
                    full_name: FullName::new(entity.first_name.clone(), entity.last_name.clone()),
                    number: entity.number,
                    position,
                    team_slug: entity.team.clone(),
                    photo_url: entity.photo_url.clone(),
                })
            })
            .collect();

        let mut generator = RosterGenerator::new();

        let mut teams: Vec<String> = players.iter().map(|p| p.team_slug.clone()).collect();
        teams.sort();
        teams.dedup();

        for team in teams {
            let generated =
                generator.fill_team(&team, &players, PitchMode::Football.squad_size());
            players.extend(generated);
        }

        let events: Vec<ClubEvent> = database
            .events
            .iter()
            .filter_map(|entity| {
                let Some(kind) = parse_event_kind(&entity.kind) else {
                    warn!(
                        "skipping seed event {}: unknown kind {}",
                        entity.id, entity.kind
                    );
                    return None;
                };

                Some(ClubEvent {
                    id: entity.id,
                    title: entity.title.clone(),
                    kind,
                    starts_at: entity.starts_at,
                    location: entity.location.clone(),
                    notes: entity.notes.clone(),
                    team_slug: entity.team.clone(),
                })
            })
            .collect();

        ClubState::with_seed(players, events, Vec::new())
    }
}

fn parse_event_kind(value: &str) -> Option<EventKind> {
    match value {
        "training" => Some(EventKind::Training),
        "match" => Some(EventKind::Match),
        "tournament" => Some(EventKind::Tournament),
        "meeting" => Some(EventKind::Meeting),
        _ => None,
    }
}
