//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::PlannerConfig;
use crate::domain::DriverStatus;
use crate::schedule::Schedule;

/// One driver's planning session.
#[derive(Debug, Default)]
pub struct Session {
    pub schedule: Schedule,
    pub driver: DriverStatus,
}

/// Shared application state.
///
/// The session sits behind a mutex so every request sees and mutates it
/// exclusively.
#[derive(Clone)]
pub struct AppState {
    /// The planning session
    pub session: Arc<Mutex<Session>>,

    /// Cost and rest configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state with an empty session.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            config: Arc::new(config),
        }
    }
}
