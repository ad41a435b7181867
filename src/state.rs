use std::sync::Arc;

use tokio::sync::Mutex;

use crate::agent::client::AgentClient;
use crate::config::AgentSettings;
use crate::models::model_profile::ModelCatalog;
use crate::models::task::TaskCatalog;
use crate::session::ChatSession;

pub struct AppState {
    /// The single chat session owned by this window
    pub session: Arc<Mutex<ChatSession>>,
    /// Remote task catalog, empty until the startup fetch succeeds
    pub tasks: Arc<Mutex<TaskCatalog>>,
    /// Remote model catalog, fetched lazily
    pub models: Arc<Mutex<ModelCatalog>>,
    /// Endpoint configuration
    pub settings: Arc<Mutex<AgentSettings>>,
    /// Shared HTTP client for the agent service
    pub client: AgentClient,
}

impl AppState {
    pub fn new(settings: AgentSettings, client: AgentClient) -> Self {
        Self {
            session: Arc::new(Mutex::new(ChatSession::new())),
            tasks: Arc::new(Mutex::new(TaskCatalog::new())),
            models: Arc::new(Mutex::new(ModelCatalog::new())),
            settings: Arc::new(Mutex::new(settings)),
            client,
        }
    }
}

// Implement Clone manually to allow state sharing in spawned tasks
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            tasks: Arc::clone(&self.tasks),
            models: Arc::clone(&self.models),
            settings: Arc::clone(&self.settings),
            client: self.client.clone(),
        }
    }
}
