//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/provider traits, but AppState pins
//! them to the concrete infra implementations.

use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use edubuddy_core::chat::service::ChatService;
use edubuddy_infra::config::{load_config, resolve_database_url};
use edubuddy_infra::llm::GeminiClient;
use edubuddy_infra::resolve_data_dir;
use edubuddy_infra::sqlite::pool::DatabasePool;
use edubuddy_infra::sqlite::SqliteConversationRepository;
use edubuddy_types::config::GenerationSettings;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteConversationRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub llm: Arc<GeminiClient>,
    pub generation: GenerationSettings,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let db_url = resolve_database_url(&config, &data_dir);
        let db_pool = DatabasePool::new(&db_url).await?;

        let chat_service = ChatService::new(SqliteConversationRepository::new(db_pool.clone()));

        let api_key: SecretString = std::env::var("GOOGLE_API_KEY")
            .context("GOOGLE_API_KEY is not set")?
            .into();
        let llm = GeminiClient::new(api_key);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            llm: Arc::new(llm),
            generation: config.generation,
            db_pool,
        })
    }
}
