use std::sync::Arc;

use http::{header, HeaderValue, Method};
use secrecy::ExposeSecret;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use transfer_booking::adapters::ai::{
    AnthropicConfig, AnthropicProvider, OpenAIConfig, OpenAIProvider,
};
use transfer_booking::adapters::http::{api_router, ReservationAppState};
use transfer_booking::application::handlers::reservation::{
    AssistantHandlerConfig, AssistantTurnHandler,
};
use transfer_booking::config::{AiConfig, AiProvider, AppConfig, ServerConfig};
use transfer_booking::ports::{AIError, AIProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.server);

    let mut state = ReservationAppState::new(config.features.clone());
    if config.features.assistant_enabled {
        let provider = build_provider(&config.ai)?;
        let info = provider.provider_info();
        tracing::info!(provider = %info.name, model = %info.model, "assistant enabled");
        state = state.with_assistant(AssistantTurnHandler::new(
            provider,
            AssistantHandlerConfig {
                timeout: config.ai.timeout(),
                temperature: config.ai.temperature,
                max_tokens: config.ai.max_tokens,
            },
        ));
    }

    let app = api_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let key = ai
        .primary_api_key()
        .map(|k| k.expose_secret().clone())
        .ok_or(AIError::AuthenticationFailed)?;

    let provider: Arc<dyn AIProvider> = match ai.primary_provider {
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &ai.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Anthropic => {
            let mut anthropic = AnthropicConfig::new(key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                anthropic = anthropic.with_model(model);
            }
            if let Some(url) = &ai.base_url {
                anthropic = anthropic.with_base_url(url);
            }
            Arc::new(AnthropicProvider::new(anthropic)?)
        }
    };
    Ok(provider)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
