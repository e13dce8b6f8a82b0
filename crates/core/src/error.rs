//! Error types for the Studyweave domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Studyweave operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Generation errors ---
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    // --- Document extraction errors ---
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    // --- Plan input errors ---
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures at the remote generation boundary. Timeouts, quota, and
/// malformed responses are all distinct from success — the caller decides
/// whether placeholder content is an acceptable substitute.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Empty completion from model {0}")]
    EmptyCompletion(String),
}

/// Failures in the document-text extractor. An unreadable document is a
/// failure; a readable document with no text is an empty `Ok` result.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Not a PDF document: {0}")]
    NotPdf(String),

    #[error("Failed to parse document: {0}")]
    Unreadable(String),

    #[error("Upload store error: {0}")]
    Store(String),
}

/// Input-validation failures for a plan request, reported before any
/// allocation work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("No subjects provided")]
    NoSubjects,

    #[error("Subject name must not be empty")]
    EmptySubjectName,

    #[error("Duplicate subject name: {0}")]
    DuplicateSubject(String),

    #[error("Negative hours for subject {subject}")]
    NegativeRequiredHours { subject: String },

    #[error("Daily {kind} hours must be non-negative")]
    NegativeDailyHours { kind: String },
}
