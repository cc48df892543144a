//! Draft assistant: turns free-text notes into a structured article draft
//! via an external generative service.

mod error;
pub mod gemini;
pub mod session;

pub use error::GenerationFailed;
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{DiscardSink, DraftSession, DraftSink, DraftState, SubmitError, SubmitRejected, Ticket};

use async_trait::async_trait;
use lexhub_core::{DraftNotes, GenerationResult};

/// Anything that can turn notes into a draft.
///
/// Implementations collapse every failure into [`GenerationFailed`] and make
/// no retry of their own.
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    async fn generate(&self, notes: &DraftNotes) -> Result<GenerationResult, GenerationFailed>;
}
