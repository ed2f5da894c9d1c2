//! Minimal gateway-agnostic contract for one streamed agent invocation.
//!
//! This crate intentionally defines only the boundary the chat client
//! consumes: credential acquisition, the invocation request shape, and
//! the ordered stream of text/trace events. It excludes transport
//! details, wire payloads, and any backend concern.

use serde_json::Value;
use thiserror::Error;

/// Error taxonomy for a single invocation attempt.
///
/// Decode-class problems in trace payloads are deliberately absent:
/// malformed trace records degrade to "no entry" on the consumer side
/// and never abort a stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No valid credentials were available at invocation time.
    #[error("認証情報を取得できませんでした")]
    MissingCredentials,

    /// The gateway answered without a completion channel to stream from.
    #[error("レスポンスがありません")]
    EmptyResponse,

    /// The stream could not be established or broke mid-flight.
    #[error("{0}")]
    Transport(String),
}

/// Opaque ambient identity handed out by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// Input required to open one streamed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub agent_id: String,
    pub alias_id: String,
    pub session_id: String,
    pub prompt: String,
    pub enable_trace: bool,
}

/// One event from an open invocation stream.
///
/// Both fields are optional and independent: an event may carry text,
/// a trace record, both, or neither. An empty event is legal and must
/// be ignored by consumers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamEvent {
    /// UTF-8 encoded fragment of the assistant's final answer.
    pub text_chunk: Option<Vec<u8>>,
    /// Opaque trace record describing reasoning or a tool invocation.
    pub trace: Option<Value>,
}

impl StreamEvent {
    /// Constructs a text-fragment event from UTF-8 text.
    #[must_use]
    pub fn text(text: impl AsRef<str>) -> Self {
        Self {
            text_chunk: Some(text.as_ref().as_bytes().to_vec()),
            ..Self::default()
        }
    }

    /// Constructs a trace-record event.
    #[must_use]
    pub fn trace(record: Value) -> Self {
        Self {
            trace: Some(record),
            ..Self::default()
        }
    }

    /// Returns true when the event carries neither text nor a trace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_chunk.is_none() && self.trace.is_none()
    }
}

/// Ordered event sequence for one invocation.
///
/// Items arrive strictly in gateway delivery order; an `Err` item ends
/// the stream from the consumer's perspective.
pub type EventStream = Box<dyn Iterator<Item = Result<StreamEvent, GatewayError>>>;

/// External Agent Gateway boundary consumed by the session reducer.
///
/// The trait carries no `Send`/`Sync` bounds: consumption is
/// single-threaded and cooperative, with one stream open at a time.
pub trait AgentGateway {
    /// Returns the current ambient credentials, if any.
    fn credentials(&self) -> Result<Credentials, GatewayError>;

    /// Opens one streamed invocation and returns its event sequence.
    fn open_invocation(
        &self,
        credentials: &Credentials,
        request: &InvocationRequest,
    ) -> Result<EventStream, GatewayError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AgentGateway, Credentials, EventStream, GatewayError, InvocationRequest, StreamEvent};

    struct MinimalGateway;

    impl AgentGateway for MinimalGateway {
        fn credentials(&self) -> Result<Credentials, GatewayError> {
            Ok(Credentials {
                access_key_id: "AKIA-minimal".to_string(),
                secret_access_key: "secret".to_string(),
                session_token: None,
            })
        }

        fn open_invocation(
            &self,
            _credentials: &Credentials,
            _request: &InvocationRequest,
        ) -> Result<EventStream, GatewayError> {
            Ok(Box::new(std::iter::empty()))
        }
    }

    #[test]
    fn error_display_uses_fixed_strings() {
        assert_eq!(
            GatewayError::MissingCredentials.to_string(),
            "認証情報を取得できませんでした"
        );
        assert_eq!(GatewayError::EmptyResponse.to_string(), "レスポンスがありません");
        assert_eq!(
            GatewayError::Transport("connection reset".to_string()).to_string(),
            "connection reset"
        );
    }

    #[test]
    fn stream_event_emptiness_requires_both_fields_absent() {
        assert!(StreamEvent::default().is_empty());
        assert!(!StreamEvent::text("fragment").is_empty());
        assert!(!StreamEvent::trace(json!({})).is_empty());

        let both = StreamEvent {
            text_chunk: Some(b"fragment".to_vec()),
            trace: Some(json!({ "orchestrationTrace": {} })),
        };
        assert!(!both.is_empty());
    }

    #[test]
    fn text_constructor_encodes_utf8_bytes() {
        let event = StreamEvent::text("こんにちは");
        assert_eq!(event.text_chunk, Some("こんにちは".as_bytes().to_vec()));
        assert_eq!(event.trace, None);
    }

    #[test]
    fn invocation_request_carries_session_and_trace_flag() {
        let request = InvocationRequest {
            agent_id: "agent-1".to_string(),
            alias_id: "alias-1".to_string(),
            session_id: "session-1".to_string(),
            prompt: "パワポを作って".to_string(),
            enable_trace: true,
        };

        assert_eq!(request.session_id, "session-1");
        assert!(request.enable_trace);
    }

    #[test]
    fn minimal_gateway_satisfies_the_contract() {
        let gateway = MinimalGateway;
        let credentials = gateway.credentials().expect("credentials available");
        let request = InvocationRequest {
            agent_id: "agent-1".to_string(),
            alias_id: "alias-1".to_string(),
            session_id: "session-1".to_string(),
            prompt: "hello".to_string(),
            enable_trace: true,
        };

        let mut stream = gateway
            .open_invocation(&credentials, &request)
            .expect("stream opens");
        assert!(stream.next().is_none());
    }
}
