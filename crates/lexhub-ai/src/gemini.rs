//! Gemini `generateContent` client using structured JSON output.

use std::time::Duration;

use async_trait::async_trait;
use lexhub_core::{DraftNotes, GenerationResult};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::DraftGenerator;
use crate::error::{DraftCause, GenerationFailed};

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-3-flash-preview";
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

// ── Wire types ──

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

fn build_prompt(notes: &DraftNotes) -> String {
    format!(
        "Draft a professional legal knowledge-management article summary from these notes: \"{}\". \
         Structure the result for a legal knowledge management system.",
        notes.as_str()
    )
}

/// Request body asking for JSON constrained to the draft schema.
fn request_body(notes: &DraftNotes) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(notes) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING", "description": "Catchy legal article title" },
                    "summary": { "type": "STRING", "description": "Detailed professional summary of the advice" },
                    "tags": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Relevant legal category tags"
                    }
                },
                "required": ["title", "summary", "tags"]
            }
        }
    })
}

/// Pull the draft text out of a `generateContent` response body.
fn extract_text(body: &str) -> Result<String, DraftCause> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(DraftCause::NoText);
    }
    Ok(text)
}

/// Parse the model's JSON draft. Missing fields are an error.
fn parse_draft(text: &str) -> Result<GenerationResult, DraftCause> {
    Ok(serde_json::from_str(text.trim())?)
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self {
            client,
            url,
            api_key: config.api_key,
        })
    }

    async fn call(&self, notes: &DraftNotes) -> Result<GenerationResult, DraftCause> {
        info!(url = %self.url, chars = notes.as_str().len(), "requesting draft");
        let resp = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(notes))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(DraftCause::Service {
                status: status.as_u16(),
                body,
            });
        }

        let draft = parse_draft(&extract_text(&body)?)?;
        info!(tags = draft.tags.len(), "draft generated");
        Ok(draft)
    }
}

#[async_trait]
impl DraftGenerator for GeminiClient {
    async fn generate(&self, notes: &DraftNotes) -> Result<GenerationResult, GenerationFailed> {
        self.call(notes).await.map_err(|cause| {
            warn!(error = %cause, "draft generation failed");
            GenerationFailed
        })
    }
}
