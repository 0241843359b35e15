use std::sync::Arc;

use lawchat_congress::{CongressClient, CongressConfig};
use lawchat_server::genai::{GeminiClient, GeminiConfig, LlmClient};
use lawchat_server::{router, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load server configuration");
        std::process::exit(1);
    });

    let congress_config = CongressConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load Congress.gov configuration");
        std::process::exit(1);
    });

    let congress = CongressClient::new(&congress_config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to create Congress.gov client");
        std::process::exit(1);
    });

    let llm: Option<Arc<dyn LlmClient>> = match GeminiConfig::from_env() {
        Ok(config) => match GeminiClient::new(&config) {
            Ok(client) => {
                tracing::info!(model = %client.model(), "Gemini client initialized");
                Some(Arc::new(client) as Arc<dyn LlmClient>)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create Gemini client");
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Gemini disabled, chat and analysis endpoints will fail");
            None
        }
    };

    let app = router(AppState::new(llm, congress), &server_config.static_dir);

    let addr = server_config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        });
    tracing::info!("listening on {addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
