//! Streaming session reducer: owns the transcript, the in-flight
//! assistant buffer, and the single-flight guard for one chat session.

use agent_gateway::{AgentGateway, GatewayError, InvocationRequest, StreamEvent};
use uuid::Uuid;

use crate::config::AgentTarget;
use crate::message::TranscriptEntry;
use crate::trace;

/// Transcript prefix for every surfaced failure.
pub const ERROR_PREFIX: &str = "エラー: ";
/// Fallback shown when a failure carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "エラーが発生しました";

/// One chat session against a hosted agent.
///
/// The session identifier is generated once and reused for every
/// invocation until the session is dropped. At most one invocation is
/// in flight at a time; the transcript is append-only and only this
/// reducer writes to it.
#[derive(Debug)]
pub struct ChatSession {
    target: AgentTarget,
    session_id: String,
    input: String,
    transcript: Vec<TranscriptEntry>,
    streaming_text: String,
    loading: bool,
}

impl ChatSession {
    /// Creates an idle session with a fresh session identifier.
    #[must_use]
    pub fn new(target: AgentTarget) -> Self {
        Self {
            target,
            session_id: Uuid::new_v4().to_string(),
            input: String::new(),
            transcript: Vec::new(),
            streaming_text: String::new(),
            loading: false,
        }
    }

    /// Returns the persistent per-session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the current content of the input field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the finalized transcript in insertion order.
    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Returns the not-yet-finalized assistant text of the current
    /// (or, after a failure, previous) stream.
    #[must_use]
    pub fn streaming_text(&self) -> &str {
        &self.streaming_text
    }

    /// True from submission until the stream ends or errors.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the input field content.
    pub fn on_input_replace(&mut self, text: String) {
        self.input = text;
    }

    /// Submits the input field: trims it, and when acceptable clears
    /// the field and runs one invocation. Blank input and submissions
    /// while loading are silent no-ops that leave the field intact.
    pub fn on_submit(&mut self, gateway: &dyn AgentGateway) {
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() || self.loading {
            return;
        }

        self.input.clear();
        self.invoke(gateway, &prompt);
    }

    /// Runs one streamed invocation end to end.
    ///
    /// Appends the user entry, folds every stream event into the
    /// transcript or the in-flight buffer, and finalizes the buffer
    /// into an assistant entry on completion. Every failure surfaces
    /// as exactly one `エラー: `-prefixed assistant entry; entries
    /// appended before the failure point are kept.
    pub fn invoke(&mut self, gateway: &dyn AgentGateway, prompt: &str) {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.loading {
            return;
        }

        self.loading = true;
        self.streaming_text.clear();
        self.transcript.push(TranscriptEntry::user(prompt));

        match self.stream_invocation(gateway, prompt) {
            Ok(()) => {
                let answer = std::mem::take(&mut self.streaming_text);
                self.transcript.push(TranscriptEntry::assistant(answer));
            }
            Err(error) => {
                let message = error_message(&error);
                self.transcript
                    .push(TranscriptEntry::assistant(format!("{ERROR_PREFIX}{message}")));
            }
        }

        self.loading = false;
    }

    fn stream_invocation(
        &mut self,
        gateway: &dyn AgentGateway,
        prompt: &str,
    ) -> Result<(), GatewayError> {
        let credentials = gateway.credentials()?;
        let request = InvocationRequest {
            agent_id: self.target.agent_id.clone(),
            alias_id: self.target.alias_id.clone(),
            session_id: self.session_id.clone(),
            prompt: prompt.to_string(),
            enable_trace: true,
        };

        let events = gateway.open_invocation(&credentials, &request)?;
        for event in events {
            self.apply_event(event?);
        }

        Ok(())
    }

    fn apply_event(&mut self, event: StreamEvent) {
        if let Some(bytes) = &event.text_chunk {
            self.streaming_text
                .push_str(&String::from_utf8_lossy(bytes));
        }

        self.transcript
            .extend(trace::interpret(event.trace.as_ref()));
    }
}

fn error_message(error: &GatewayError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
