use core::shared::FullName;
use core::utils::IntegerUtils;
use core::{PlayerPosition, RosterPlayer};

static FIRST_NAMES: &[&str] = &[
    "Alex", "Robin", "Kim", "Sascha", "Luca", "Noel", "Jules", "Mika", "Charlie", "Sam", "Toni",
    "Jona", "Andrea", "Nika", "Eli",
];

static LAST_NAMES: &[&str] = &[
    "Meyer", "Schmidt", "Koch", "Wagner", "Becker", "Hofmann", "Schulz", "Peters", "Brauer",
    "Seidel", "Kuhn", "Albrecht", "Franke", "Busch",
];

// Outfield rotation for generated players; seed data provides keepers.
static FILL_POSITIONS: &[PlayerPosition] = &[
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
    PlayerPosition::Forward,
];

pub struct RosterGenerator {
    next_id: u32,
}

impl RosterGenerator {
    pub fn new() -> Self {
        RosterGenerator { next_id: 0 }
    }

    /// Generates demo players until the team holds `target` members.
    /// Ids continue after the highest existing id; jersey numbers avoid
    /// the ones already taken in the team.
    pub fn fill_team(
        &mut self,
        team_slug: &str,
        existing: &[RosterPlayer],
        target: usize,
    ) -> Vec<RosterPlayer> {
        let highest_id = existing.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(highest_id + 1);

        let in_team = existing
            .iter()
            .filter(|p| p.team_slug == team_slug)
            .count();

        let mut taken_numbers: Vec<u8> = existing
            .iter()
            .filter(|p| p.team_slug == team_slug)
            .map(|p| p.number)
            .collect();

        let missing = target.saturating_sub(in_team);
        let mut generated = Vec::with_capacity(missing);

        for index in 0..missing {
            let number = Self::free_number(&taken_numbers);
            taken_numbers.push(number);

            let id = self.next_id;
            self.next_id += 1;

            generated.push(RosterPlayer {
                id,
                full_name: Self::random_name(),
                number,
                position: FILL_POSITIONS[index % FILL_POSITIONS.len()],
                team_slug: team_slug.to_string(),
                photo_url: None,
            });
        }

        generated
    }

    fn random_name() -> FullName {
        let first = FIRST_NAMES[IntegerUtils::random(0, FIRST_NAMES.len() as i32 - 1) as usize];
        let last = LAST_NAMES[IntegerUtils::random(0, LAST_NAMES.len() as i32 - 1) as usize];

        FullName::new(first.to_string(), last.to_string())
    }

    fn free_number(taken: &[u8]) -> u8 {
        loop {
            let candidate = IntegerUtils::random(2, 99) as u8;
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        RosterGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_player(id: u32, number: u8, team: &str) -> RosterPlayer {
        RosterPlayer {
            id,
            full_name: FullName::new("Seed".to_string(), "Player".to_string()),
            number,
            position: PlayerPosition::Goalkeeper,
            team_slug: team.to_string(),
            photo_url: None,
        }
    }

    #[test]
    fn fills_up_to_target_without_number_collisions() {
        let existing = vec![seed_player(1, 1, "u15"), seed_player(2, 9, "u15")];
        let mut generator = RosterGenerator::new();

        let generated = generator.fill_team("u15", &existing, 11);

        assert_eq!(generated.len(), 9);

        let mut numbers: Vec<u8> = existing
            .iter()
            .chain(generated.iter())
            .map(|p| p.number)
            .collect();
        let total = numbers.len();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), total);
    }

    #[test]
    fn full_team_generates_nothing() {
        let existing: Vec<RosterPlayer> = (1..=11)
            .map(|i| seed_player(i, i as u8, "u12"))
            .collect();
        let mut generator = RosterGenerator::new();

        assert!(generator.fill_team("u12", &existing, 11).is_empty());
    }

    #[test]
    fn ids_continue_after_existing_across_teams() {
        let existing = vec![seed_player(7, 1, "u12")];
        let mut generator = RosterGenerator::new();

        let first_batch = generator.fill_team("u12", &existing, 2);
        let second_batch = generator.fill_team("u15", &existing, 1);

        assert_eq!(first_batch[0].id, 8);
        assert_eq!(second_batch[0].id, 9);
    }
}
