//! Service entry point: configuration, tracing, storage, wiring, serve.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use security_expert::adapters::ai::{AnthropicConfig, AnthropicProvider, MockAiProvider};
use security_expert::adapters::http::{app_router, AppState};
use security_expert::adapters::http::analysis::AnalysisHandlers;
use security_expert::adapters::http::interview::InterviewHandlers;
use security_expert::adapters::sqlite::{self, SqliteReportStore, SqliteSessionStore};
use security_expert::application::handlers::{
    GetAnalysisHandler, GetSessionHandler, ListHistoryHandler, NextQuestionHandler,
    RequestAnalysisHandler, StartInterviewHandler, SubmitAnswerHandler,
};
use security_expert::config::{AppConfig, ProviderKind};
use security_expert::ports::AiProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = sqlite::connect(&config.database.url).await?;
    sqlite::init_schema(&pool).await?;
    info!(url = %config.database.url, "database ready");

    let sessions = Arc::new(SqliteSessionStore::new(pool.clone()));
    let reports = Arc::new(SqliteReportStore::new(pool));

    let provider: Arc<dyn AiProvider> = match config.ai.provider {
        ProviderKind::Anthropic => {
            let anthropic_config =
                AnthropicConfig::new(config.ai.anthropic_api_key.clone().unwrap_or_default())
                    .with_model(config.ai.model.clone())
                    .with_timeout(config.ai.timeout())
                    .with_max_retries(config.ai.max_retries);
            Arc::new(AnthropicProvider::new(anthropic_config)?)
        }
        // Development fallback; serves one canned report per process start.
        ProviderKind::Mock => Arc::new(
            MockAiProvider::new()
                .with_response("## Threat Overview\nMock analysis for development.\n"),
        ),
    };
    info!(provider = %provider.provider_info().name, model = %provider.provider_info().model, "AI provider ready");

    let interview = InterviewHandlers::new(
        Arc::new(StartInterviewHandler::new(sessions.clone())),
        Arc::new(SubmitAnswerHandler::new(sessions.clone())),
        Arc::new(NextQuestionHandler::new(sessions.clone())),
        Arc::new(GetSessionHandler::new(sessions.clone())),
        Arc::new(ListHistoryHandler::new(sessions.clone())),
    );
    let analysis = AnalysisHandlers::new(
        Arc::new(RequestAnalysisHandler::new(
            sessions.clone(),
            reports.clone(),
            provider,
        )),
        Arc::new(GetAnalysisHandler::new(sessions, reports)),
    );

    let app = app_router(
        AppState {
            interview,
            analysis,
        },
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
    info!("shutting down");
}
