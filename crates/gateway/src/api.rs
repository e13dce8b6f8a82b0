//! Study-aid and planner handlers.
//!
//! Error mapping mirrors the error taxonomy: input validation problems are
//! 4xx before any work happens, feasibility shortfalls are a structured
//! 200 body (`success: false`), and generation-backend failures surface as
//! 502 — except for the structured study aids (flashcards, quiz), where
//! unusable model output is substituted with placeholder content.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use studyweave_content::prompts;
use studyweave_content::structured::{self, Flashcard, QuizItem};
use studyweave_core::error::{ExtractError, GeneratorError, PlanError};
use studyweave_core::generator::GenerationRequest;
use studyweave_core::study::{PlanRequest, Schedule};
use studyweave_planner::{PlanOutcome, Shortfall, build_plan};

use crate::SharedState;

// --- Error plumbing ---

/// A handler failure rendered as `{"detail": ...}` with a status code.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}

impl From<GeneratorError> for ApiError {
    fn from(e: GeneratorError) -> Self {
        error!(error = %e, "Generation backend failure");
        let status = match e {
            GeneratorError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            GeneratorError::AuthenticationFailed(_) | GeneratorError::NotConfigured(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_GATEWAY,
        };
        Self::new(status, format!("Generation failed: {e}"))
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::Store(_) => {
                error!(error = %e, "Upload store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("File save error: {e}"))
            }
            _ => Self::bad_request(format!("PDF error: {e}")),
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(e: PlanError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    }
}

// --- Explanations ---

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

pub async fn explain_handler(
    State(state): State<SharedState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let generation = GenerationRequest::new(prompts::explain_prompt(&request.topic))
        .with_system(prompts::EXPLAIN_SYSTEM);
    let response = state.generator.generate(with_defaults(generation, &state)).await?;
    Ok(Json(ExplainResponse {
        explanation: response.text,
    }))
}

pub async fn explain_detailed_handler(
    State(state): State<SharedState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let generation = GenerationRequest::new(prompts::explain_detailed_prompt(&request.topic))
        .with_system(prompts::EXPLAIN_DETAILED_SYSTEM);
    let response = state.generator.generate(with_defaults(generation, &state)).await?;
    Ok(Json(ExplainResponse {
        explanation: response.text,
    }))
}

// --- PDF-backed study aids ---

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub async fn summarize_handler(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<SummaryResponse>, ApiError> {
    let text = extract_upload_text(&state, multipart).await?;
    let generation =
        GenerationRequest::new(prompts::summary_prompt(&text)).with_system(prompts::SUMMARY_SYSTEM);
    let response = state.generator.generate(with_defaults(generation, &state)).await?;
    Ok(Json(SummaryResponse {
        summary: response.text,
    }))
}

#[derive(Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

pub async fn flashcards_handler(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<FlashcardsResponse>, ApiError> {
    let text = extract_upload_text(&state, multipart).await?;
    let generation = GenerationRequest::new(prompts::flashcards_prompt(&text));

    // Unusable model output (including a failed call) becomes placeholder
    // content rather than an error; this fallback is reserved for the
    // structured study aids.
    let outcome = match state.generator.generate(with_defaults(generation, &state)).await {
        Ok(response) => structured::parse_flashcards(&response.text),
        Err(e) => {
            warn!(error = %e, "Flashcard generation failed, substituting placeholder");
            structured::parse_flashcards("")
        }
    };
    if outcome.is_placeholder() {
        info!("Returning placeholder flashcards");
    }
    Ok(Json(FlashcardsResponse {
        flashcards: outcome.into_items(),
    }))
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizItem>,
}

pub async fn quiz_handler(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<QuizResponse>, ApiError> {
    let text = extract_upload_text(&state, multipart).await?;
    let generation = GenerationRequest::new(prompts::quiz_prompt(&text));

    let outcome = match state.generator.generate(with_defaults(generation, &state)).await {
        Ok(response) => structured::parse_quiz(&response.text),
        Err(e) => {
            warn!(error = %e, "Quiz generation failed, substituting placeholder");
            structured::parse_quiz("")
        }
    };
    if outcome.is_placeholder() {
        info!("Returning placeholder quiz");
    }
    Ok(Json(QuizResponse {
        quiz: outcome.into_items(),
    }))
}

/// Pull the `pdf` multipart field, stage it in the transient store, and
/// extract its text. The stored artifact is removed when this function
/// returns, success or failure.
async fn extract_upload_text(
    state: &SharedState,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("pdf") {
            let filename = field.file_name().unwrap_or("upload.pdf").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::bad_request("Missing 'pdf' upload field"))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::bad_request("Only PDF files allowed"));
    }

    // Stage the bytes on disk and extract from the stored file; the
    // handle's Drop removes it on every path out of here.
    let stored = state.store.save(&bytes, &filename)?;

    let text = studyweave_extract::extract_text_from_path(
        stored.path(),
        state.config.uploads.text_char_limit,
    )?;
    if text.trim().is_empty() {
        return Err(ApiError::bad_request("No text in PDF"));
    }

    info!(file = %filename, chars = text.len(), "Extracted upload text");
    Ok(text)
}

// --- Planner ---

#[derive(Serialize)]
#[serde(untagged)]
pub enum PlannerResponse {
    Failure {
        success: bool,
        error: String,
        details: Shortfall,
        shortfalls: Vec<Shortfall>,
    },
    Success {
        success: bool,
        plan: String,
        base_allocation: Schedule,
    },
}

pub async fn planner_handler(
    State(state): State<SharedState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlannerResponse>, ApiError> {
    // "Today" is resolved here, at the edge; the planner itself never
    // reads the wall clock.
    let start = request
        .start_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let schedule = match build_plan(&request, start)? {
        PlanOutcome::Infeasible(shortfalls) => {
            let first = shortfalls[0].clone();
            info!(subject = %first.subject, shortage = first.shortage, "Plan infeasible");
            return Ok(Json(PlannerResponse::Failure {
                success: false,
                error: format!("Insufficient time for subject {}", first.subject),
                details: first,
                shortfalls,
            }));
        }
        PlanOutcome::Feasible(schedule) => schedule,
    };

    // Hand the raw allocation to the model for a human-friendly timetable.
    let schedule_json = serde_json::to_string_pretty(&schedule)
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let generation = GenerationRequest::new(prompts::plan_elaboration_prompt(&schedule_json))
        .with_system(prompts::PLANNER_SYSTEM);
    let response = state.generator.generate(with_defaults(generation, &state)).await?;

    Ok(Json(PlannerResponse::Success {
        success: true,
        plan: response.text,
        base_allocation: schedule,
    }))
}

/// Apply the configured generation parameters to a request.
fn with_defaults(mut request: GenerationRequest, state: &SharedState) -> GenerationRequest {
    request.temperature = state.config.temperature;
    request.max_tokens = state.config.max_tokens;
    request
}
