//! HTTP API gateway for Studyweave.
//!
//! Exposes the study-companion REST surface: topic explanations, PDF
//! summaries, flashcard and quiz generation, and the study planner.
//!
//! Built on Axum. Layers applied:
//! - CORS (permissive, the service fronts a browser client)
//! - Request body size limit (uploads)
//! - HTTP trace logging

pub mod api;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use studyweave_core::generator::Generator;
use studyweave_extract::UploadStore;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: studyweave_config::AppConfig,
    pub generator: Arc<dyn Generator>,
    pub store: UploadStore,
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    let body_limit = state.config.uploads.max_bytes;

    // CORS: the original deployment allowed any origin; the API carries no
    // credentials or cookies.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/explain", post(api::explain_handler))
        .route("/api/explain/detailed", post(api::explain_detailed_handler))
        .route("/api/summarize", post(api::summarize_handler))
        .route("/api/flashcards", post(api::flashcards_handler))
        .route("/api/quiz", post(api::quiz_handler))
        .route("/api/planner", post(api::planner_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(
    config: studyweave_config::AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let generator = studyweave_providers::build_from_config(&config)?;
    let store = UploadStore::new(&config.uploads.dir)?;

    let state = Arc::new(GatewayState {
        config,
        generator,
        store,
    });

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
    docs: &'static str,
    ai_provider: String,
}

async fn root_handler(State(state): State<SharedState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Studyweave API",
        docs: "/api/health",
        ai_provider: state.generator.name().to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    ai_provider: String,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        ai_provider: state.generator.name().to_string(),
    })
}

// --- Test support ---

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use studyweave_core::error::GeneratorError;
    use studyweave_core::generator::{GenerationRequest, GenerationResponse};

    /// A generator that always returns the same scripted text.
    pub struct FixedGenerator(pub &'static str);

    #[async_trait::async_trait]
    impl Generator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed_mock"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> Result<GenerationResponse, GeneratorError> {
            Ok(GenerationResponse {
                text: self.0.to_string(),
                model: "mock-model".into(),
                usage: None,
            })
        }
    }

    /// A generator that always fails with a network error.
    pub struct FailingGenerator;

    #[async_trait::async_trait]
    impl Generator for FailingGenerator {
        fn name(&self) -> &str {
            "failing_mock"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> Result<GenerationResponse, GeneratorError> {
            Err(GeneratorError::Network("connection refused".into()))
        }
    }

    pub fn test_state(generator: Arc<dyn Generator>) -> SharedState {
        let dir = std::env::temp_dir().join("studyweave-gateway-tests");
        let store = UploadStore::new(&dir).expect("upload store");
        Arc::new(GatewayState {
            config: studyweave_config::AppConfig::default(),
            generator,
            store,
        })
    }
}
