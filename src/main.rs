use pitchside_core::utils::TimeEstimation;
use pitchside_core::EditorCapabilities;
use database::{DatabaseGenerator, DatabaseLoader, TacticStore};
use env_logger::Env;
use log::info;
use std::env;
use std::path::PathBuf;
use web::{AppData, ClubServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let port: u16 = env::var("PITCHSIDE_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(18000);

    let data_dir = env::var("PITCHSIDE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let is_read_only = env::var("PITCHSIDE_READ_ONLY") == Ok(String::from("1"));

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let club_state = DatabaseGenerator::generate(&database);

    let tactic_store = TacticStore::open(&data_dir)
        .expect("cannot start server without a writable tactics directory");

    let capabilities = if is_read_only {
        info!("read only mode: roster and tactics editing disabled");
        EditorCapabilities::read_only()
    } else {
        EditorCapabilities::full()
    };

    let data = AppData::new(club_state, tactic_store, capabilities);

    ClubServer::new(data, port).run().await;
}
