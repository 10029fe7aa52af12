pub mod event;
pub mod message;
pub mod player;
pub mod state;

pub use event::{ClubEvent, EventForm, EventKind};
pub use message::{ClubMessage, MessageForm};
pub use player::{PlayerForm, PlayerPosition, RosterPlayer};
pub use state::{ClubState, ClubStateError};
