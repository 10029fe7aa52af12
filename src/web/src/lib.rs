mod common;
mod error;
mod events;
mod home;
mod messages;
mod players;
mod routes;
mod tactics;
mod views;

pub use error::{ApiError, ApiResult};
pub use tactics::saver::{SaveCoordinator, SaveOutcome, StoreWriter, TacticWriter};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use pitchside_core::{ClubState, EditorCapabilities};
use database::TacticStore;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct ClubServer {
    data: AppData,
    port: u16,
}

impl ClubServer {
    pub fn new(data: AppData, port: u16) -> Self {
        ClubServer { data, port }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:{}", self.port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }
    }
}

pub struct AppData {
    pub club: Arc<RwLock<ClubState>>,
    pub tactics: Arc<TacticStore>,
    pub saver: Arc<SaveCoordinator<StoreWriter>>,
    pub capabilities: EditorCapabilities,
}

impl AppData {
    pub fn new(club: ClubState, tactics: TacticStore, capabilities: EditorCapabilities) -> Self {
        let tactics = Arc::new(tactics);
        let saver = Arc::new(SaveCoordinator::new(Arc::new(StoreWriter::new(
            Arc::clone(&tactics),
        ))));

        AppData {
            club: Arc::new(RwLock::new(club)),
            tactics,
            saver,
            capabilities,
        }
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            club: Arc::clone(&self.club),
            tactics: Arc::clone(&self.tactics),
            saver: Arc::clone(&self.saver),
            capabilities: self.capabilities,
        }
    }
}
