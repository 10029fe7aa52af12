pub mod generators;
pub mod loaders;
pub mod stores;

pub use generators::DatabaseGenerator;
pub use stores::{StoreError, TacticStore};

use loaders::{EventEntity, EventLoader, PlayerEntity, PlayerLoader};

/// Seed data embedded into the binary: the demo club shipped with the
/// application. Runtime state is generated from it at startup.
pub struct DatabaseEntity {
    pub players: Vec<PlayerEntity>,
    pub events: Vec<EventEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        DatabaseEntity {
            players: PlayerLoader::load(),
            events: EventLoader::load(),
        }
    }
}
