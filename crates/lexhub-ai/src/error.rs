use thiserror::Error;

/// The only failure the draft assistant reports to callers.
///
/// Transport, service and parse errors are logged where they occur and
/// collapse into this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to generate draft")]
pub struct GenerationFailed;

/// Internal reason a generation call failed. Logged, never returned.
#[derive(Error, Debug)]
pub(crate) enum DraftCause {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("service returned no draft text")]
    NoText,
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
