use crate::club::{ClubEvent, ClubMessage, EventForm, MessageForm, PlayerForm, RosterPlayer};
use crate::shared::FullName;
use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubStateError {
    Validation(String),
    NotFound(String),
}

impl Display for ClubStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubStateError::Validation(message) => write!(f, "validation failed: {}", message),
            ClubStateError::NotFound(message) => write!(f, "not found: {}", message),
        }
    }
}

impl std::error::Error for ClubStateError {}

/// In-memory club state: rosters, calendar and message board.
///
/// All mutation goes through validated operations; id sequences are owned
/// here so callers never pick identifiers themselves.
#[derive(Debug)]
pub struct ClubState {
    players: Vec<RosterPlayer>,
    events: Vec<ClubEvent>,
    messages: Vec<ClubMessage>,
    next_player_id: u32,
    next_event_id: u32,
    next_message_id: u32,
}

impl ClubState {
    pub fn new() -> Self {
        ClubState {
            players: Vec::new(),
            events: Vec::new(),
            messages: Vec::new(),
            next_player_id: 1,
            next_event_id: 1,
            next_message_id: 1,
        }
    }

    pub fn with_seed(
        players: Vec<RosterPlayer>,
        events: Vec<ClubEvent>,
        messages: Vec<ClubMessage>,
    ) -> Self {
        let next_player_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_event_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let next_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        ClubState {
            players,
            events,
            messages,
            next_player_id,
            next_event_id,
            next_message_id,
        }
    }

    // ---- players ----

    pub fn players(&self, team_slug: Option<&str>) -> Vec<&RosterPlayer> {
        let mut players: Vec<&RosterPlayer> = self
            .players
            .iter()
            .filter(|player| team_slug.is_none_or(|team| player.team_slug == team))
            .collect();

        players.sort_by_key(|player| (player.team_slug.clone(), player.number));
        players
    }

    pub fn player(&self, id: u32) -> Option<&RosterPlayer> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn team_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .players
            .iter()
            .map(|player| player.team_slug.clone())
            .collect();

        slugs.sort();
        slugs.dedup();
        slugs
    }

    pub fn add_player(&mut self, form: PlayerForm) -> Result<&RosterPlayer, ClubStateError> {
        Self::validate_player_form(&form)?;
        self.ensure_free_number(&form, None)?;

        let id = self.next_player_id;
        self.next_player_id += 1;

        self.players.push(RosterPlayer {
            id,
            full_name: FullName::new(form.first_name, form.last_name),
            number: form.number,
            position: form.position,
            team_slug: form.team_slug,
            photo_url: form.photo_url,
        });

        Ok(self.players.last().unwrap())
    }

    pub fn update_player(
        &mut self,
        id: u32,
        form: PlayerForm,
    ) -> Result<&RosterPlayer, ClubStateError> {
        Self::validate_player_form(&form)?;
        self.ensure_free_number(&form, Some(id))?;

        let player = self
            .players
            .iter_mut()
            .find(|player| player.id == id)
            .ok_or_else(|| ClubStateError::NotFound(format!("player {}", id)))?;

        player.full_name = FullName::new(form.first_name, form.last_name);
        player.number = form.number;
        player.position = form.position;
        player.team_slug = form.team_slug;
        player.photo_url = form.photo_url;

        Ok(player)
    }

    pub fn remove_player(&mut self, id: u32) -> Result<(), ClubStateError> {
        let before = self.players.len();
        self.players.retain(|player| player.id != id);

        if self.players.len() == before {
            return Err(ClubStateError::NotFound(format!("player {}", id)));
        }

        Ok(())
    }

    fn validate_player_form(form: &PlayerForm) -> Result<(), ClubStateError> {
        if form.first_name.trim().is_empty() && form.last_name.trim().is_empty() {
            return Err(ClubStateError::Validation(
                "player name cannot be empty".to_string(),
            ));
        }

        if form.number == 0 || form.number > 99 {
            return Err(ClubStateError::Validation(format!(
                "jersey number {} is outside 1-99",
                form.number
            )));
        }

        if form.team_slug.trim().is_empty() {
            return Err(ClubStateError::Validation(
                "player must belong to a team".to_string(),
            ));
        }

        Ok(())
    }

    fn ensure_free_number(
        &self,
        form: &PlayerForm,
        exclude_id: Option<u32>,
    ) -> Result<(), ClubStateError> {
        let taken = self.players.iter().any(|player| {
            Some(player.id) != exclude_id
                && player.team_slug == form.team_slug
                && player.number == form.number
        });

        if taken {
            return Err(ClubStateError::Validation(format!(
                "number {} is already taken in team {}",
                form.number, form.team_slug
            )));
        }

        Ok(())
    }

    // ---- events ----

    pub fn events(&self, team_slug: Option<&str>) -> Vec<&ClubEvent> {
        let mut events: Vec<&ClubEvent> = self
            .events
            .iter()
            .filter(|event| team_slug.is_none_or(|team| event.team_slug == team))
            .collect();

        events.sort_by_key(|event| event.starts_at);
        events
    }

    pub fn event(&self, id: u32) -> Option<&ClubEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn add_event(&mut self, form: EventForm) -> Result<&ClubEvent, ClubStateError> {
        Self::validate_event_form(&form)?;

        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(ClubEvent {
            id,
            title: form.title,
            kind: form.kind,
            starts_at: form.starts_at,
            location: form.location,
            notes: form.notes,
            team_slug: form.team_slug,
        });

        Ok(self.events.last().unwrap())
    }

    pub fn update_event(&mut self, id: u32, form: EventForm) -> Result<&ClubEvent, ClubStateError> {
        Self::validate_event_form(&form)?;

        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| ClubStateError::NotFound(format!("event {}", id)))?;

        event.title = form.title;
        event.kind = form.kind;
        event.starts_at = form.starts_at;
        event.location = form.location;
        event.notes = form.notes;
        event.team_slug = form.team_slug;

        Ok(event)
    }

    pub fn remove_event(&mut self, id: u32) -> Result<(), ClubStateError> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() == before {
            return Err(ClubStateError::NotFound(format!("event {}", id)));
        }

        Ok(())
    }

    fn validate_event_form(form: &EventForm) -> Result<(), ClubStateError> {
        if form.title.trim().is_empty() {
            return Err(ClubStateError::Validation(
                "event title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    // ---- messages ----

    pub fn messages(&self) -> Vec<&ClubMessage> {
        let mut messages: Vec<&ClubMessage> = self.messages.iter().collect();
        messages.sort_by_key(|message| std::cmp::Reverse(message.posted_at));
        messages
    }

    pub fn post_message(
        &mut self,
        form: MessageForm,
        now: NaiveDateTime,
    ) -> Result<&ClubMessage, ClubStateError> {
        if form.author.trim().is_empty() {
            return Err(ClubStateError::Validation(
                "message author cannot be empty".to_string(),
            ));
        }

        if form.body.trim().is_empty() {
            return Err(ClubStateError::Validation(
                "message body cannot be empty".to_string(),
            ));
        }

        let id = self.next_message_id;
        self.next_message_id += 1;

        self.messages.push(ClubMessage {
            id,
            author: form.author,
            body: form.body,
            posted_at: now,
            team_slug: form.team_slug,
        });

        Ok(self.messages.last().unwrap())
    }

    pub fn remove_message(&mut self, id: u32) -> Result<(), ClubStateError> {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);

        if self.messages.len() == before {
            return Err(ClubStateError::NotFound(format!("message {}", id)));
        }

        Ok(())
    }
}
