use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::config::Config;
use crate::services::Dashboard;

/// One dashboard, one writer at a time: intents hold the write lock for the
/// whole transition.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub sse_tx: broadcast::Sender<String>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, sse_tx: broadcast::Sender<String>, config: Arc<Config>) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            sse_tx,
            config,
        }
    }
}
