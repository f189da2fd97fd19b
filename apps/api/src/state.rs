use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assist::ContentAssistant;
use crate::config::Config;
use crate::forms::workspace::Workspace;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Identity and theme, written through to local device storage.
    pub session: Arc<RwLock<SessionStore>>,
    /// Open documents by id. Lives for the lifetime of the process only.
    pub workspace: Arc<RwLock<Workspace>>,
    /// Pluggable writing assistant. Default: CannedAssistant.
    pub assistant: Arc<dyn ContentAssistant>,
}

impl AppState {
    pub fn new(
        config: Config,
        session: SessionStore,
        assistant: Arc<dyn ContentAssistant>,
    ) -> Self {
        AppState {
            config,
            session: Arc::new(RwLock::new(session)),
            workspace: Arc::new(RwLock::new(Workspace::new())),
            assistant,
        }
    }
}
