//! chat-relay server binary.

use std::sync::Arc;

use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use chat_relay::adapters::ai::{OpenAIConfig, OpenAIProvider};
use chat_relay::adapters::http::{chat_router, ChatAppState, SessionCookieConfig};
use chat_relay::adapters::postgres::PostgresConversationStore;
use chat_relay::adapters::storage::InMemoryConversationStore;
use chat_relay::config::{AppConfig, StorageBackend, ValidationError};
use chat_relay::ports::{CompletionClient, ConversationStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = build_store(&config).await?;
    let completion: Arc<dyn CompletionClient> = {
        let openai = OpenAIConfig::from_app_config(&config.ai)
            .ok_or(ValidationError::MissingRequired("AI__OPENAI_API_KEY"))?;
        tracing::info!(model = %openai.model, "Using OpenAI completion provider");
        Arc::new(OpenAIProvider::new(openai)?)
    };

    let state = ChatAppState::new(store, completion);
    let app = chat_router(state, SessionCookieConfig::new(config.is_production()))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "chat-relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("chat-relay stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_store(
    config: &AppConfig,
) -> Result<Arc<dyn ConversationStore>, Box<dyn std::error::Error>> {
    match config.database.backend {
        StorageBackend::Postgres => {
            let store = PostgresConversationStore::connect(&config.database).await?;
            if config.database.run_migrations {
                store.migrate().await?;
                tracing::info!("Database migrations applied");
            }
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory conversation store; history is lost on restart");
            Ok(Arc::new(InMemoryConversationStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
