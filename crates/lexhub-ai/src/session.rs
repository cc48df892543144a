//! Draft assistant session: input, single in-flight request, result.
//!
//! The session owns the pending flag. [`DraftSession::begin`] refuses a
//! second submission while one is outstanding, independent of any UI
//! control. Dismissing the session abandons an outstanding request: its
//! ticket goes stale and a late result is dropped by
//! [`DraftSession::complete`].

use lexhub_core::{DraftNotes, GenerationResult};
use thiserror::Error;
use tracing::{debug, info};

use crate::{DraftGenerator, GenerationFailed};

/// Why a submission was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("notes are empty")]
    EmptyInput,
    #[error("a draft is already being generated")]
    AlreadyPending,
    #[error("a draft is already available; edit the input to regenerate")]
    AlreadyDrafted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmitRejected),
    #[error(transparent)]
    Failed(#[from] GenerationFailed),
}

/// Identifies one submission. Only the newest ticket can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftState {
    Editing,
    Pending(Ticket),
    Drafted(GenerationResult),
}

/// Destination for "Save to KMS".
pub trait DraftSink {
    fn save(&self, draft: &GenerationResult);
}

/// The only shipped sink: no persistence service exists, so the draft is
/// logged and dropped.
#[derive(Debug, Default)]
pub struct DiscardSink;

impl DraftSink for DiscardSink {
    fn save(&self, draft: &GenerationResult) {
        info!(title = %draft.title, "save requested; no knowledge store configured, draft discarded");
    }
}

#[derive(Debug)]
pub struct DraftSession {
    input: String,
    state: DraftState,
    issued: u64,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: DraftState::Editing,
            issued: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DraftState::Pending(_))
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.state {
            DraftState::Drafted(draft) => Some(draft),
            _ => None,
        }
    }

    /// Mark a submission as in flight and hand back the validated notes.
    pub fn begin(&mut self) -> Result<(Ticket, DraftNotes), SubmitRejected> {
        match self.state {
            DraftState::Pending(_) => return Err(SubmitRejected::AlreadyPending),
            DraftState::Drafted(_) => return Err(SubmitRejected::AlreadyDrafted),
            DraftState::Editing => {}
        }
        let notes = DraftNotes::new(&self.input).ok_or(SubmitRejected::EmptyInput)?;
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = DraftState::Pending(ticket);
        debug!(ticket = self.issued, "draft submission started");
        Ok((ticket, notes))
    }

    /// Record the outcome of a submission.
    ///
    /// Returns `Ok(false)` when `ticket` is stale (the session was dismissed
    /// since), in which case the outcome is dropped and the state untouched.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerationResult, GenerationFailed>,
    ) -> Result<bool, GenerationFailed> {
        if self.state != DraftState::Pending(ticket) {
            debug!(ticket = ticket.0, "dropping result of abandoned submission");
            return Ok(false);
        }
        match outcome {
            Ok(draft) => {
                self.state = DraftState::Drafted(draft);
                Ok(true)
            }
            Err(failed) => {
                self.state = DraftState::Editing;
                Err(failed)
            }
        }
    }

    /// Submit the current input and wait for the draft.
    pub async fn submit(
        &mut self,
        generator: &dyn DraftGenerator,
    ) -> Result<&GenerationResult, SubmitError> {
        let (ticket, notes) = self.begin()?;
        let outcome = generator.generate(&notes).await;
        self.complete(ticket, outcome)?;
        self.result().ok_or(SubmitError::Failed(GenerationFailed))
    }

    /// Discard the current draft and return to editing the same input.
    pub fn edit_input(&mut self) {
        if let DraftState::Drafted(_) = self.state {
            self.state = DraftState::Editing;
        }
    }

    /// Close the session. Any in-flight submission is abandoned.
    pub fn dismiss(&mut self) {
        if self.is_pending() {
            info!("draft session dismissed with a submission in flight");
        }
        self.input.clear();
        self.state = DraftState::Editing;
    }

    /// "Save to KMS": hand the draft to `sink`, then close the session.
    /// Returns whether there was a draft to save.
    pub fn save(&mut self, sink: &dyn DraftSink) -> bool {
        let saved = match self.result() {
            Some(draft) => {
                sink.save(draft);
                true
            }
            None => false,
        };
        self.dismiss();
        saved
    }
}
