//! Deterministic mock implementation of the shared `agent_gateway` contract.
//!
//! This crate contains no transport logic and is intended for local
//! development and contract-level integration testing: it replays a
//! fixed event script in order and records every request it receives.

use std::sync::{Mutex, MutexGuard};

use agent_gateway::{
    AgentGateway, Credentials, EventStream, GatewayError, InvocationRequest, StreamEvent,
};
use serde_json::json;

/// Stable gateway identifier used for explicit startup selection.
pub const MOCK_GATEWAY_ID: &str = "mock";

/// Scripted gateway used by `agent_chat` tests and local runs.
#[derive(Debug)]
pub struct ScriptedGateway {
    script: Vec<Result<StreamEvent, GatewayError>>,
    credentials_available: bool,
    open_failure: Option<GatewayError>,
    requests: Mutex<Vec<InvocationRequest>>,
}

impl ScriptedGateway {
    /// Creates a gateway that streams the given events and completes.
    #[must_use]
    pub fn new(events: Vec<StreamEvent>) -> Self {
        Self::with_script(events.into_iter().map(Ok).collect())
    }

    /// Creates a gateway with an explicit per-item script, allowing
    /// mid-stream transport failures.
    #[must_use]
    pub fn with_script(script: Vec<Result<StreamEvent, GatewayError>>) -> Self {
        Self {
            script,
            credentials_available: true,
            open_failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Makes credential acquisition fail for every invocation.
    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.credentials_available = false;
        self
    }

    /// Makes stream establishment fail with the given error.
    #[must_use]
    pub fn failing_open(mut self, error: GatewayError) -> Self {
        self.open_failure = Some(error);
        self
    }

    /// Returns every invocation request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<InvocationRequest> {
        lock_unpoisoned(&self.requests).clone()
    }

    /// Deterministic demo script: one reasoning trace, one action
    /// trace, then a chunked assistant answer.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            StreamEvent::trace(json!({
                "orchestrationTrace": {
                    "rationale": {
                        "text": "まずWeb検索で情報を集めます。"
                    }
                }
            })),
            StreamEvent::trace(json!({
                "orchestrationTrace": {
                    "invocationInput": {
                        "actionGroupInvocationInput": {
                            "function": "search-web",
                            "parameters": [
                                { "name": "query", "value": "みのるん" }
                            ]
                        }
                    }
                }
            })),
            StreamEvent::trace(json!({
                "orchestrationTrace": {
                    "invocationInput": {
                        "actionGroupInvocationInput": {
                            "function": "create-pptx",
                            "parameters": [
                                { "name": "title", "value": "調査結果" },
                                { "name": "content", "value": "..." }
                            ]
                        }
                    }
                }
            })),
            StreamEvent::text("資料を作成しました。"),
            StreamEvent::text("メールで送信します。"),
        ])
    }
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::demo()
    }
}

impl AgentGateway for ScriptedGateway {
    fn credentials(&self) -> Result<Credentials, GatewayError> {
        if !self.credentials_available {
            return Err(GatewayError::MissingCredentials);
        }

        Ok(Credentials {
            access_key_id: "AKIA-scripted".to_string(),
            secret_access_key: "scripted-secret".to_string(),
            session_token: Some("scripted-session-token".to_string()),
        })
    }

    fn open_invocation(
        &self,
        _credentials: &Credentials,
        request: &InvocationRequest,
    ) -> Result<EventStream, GatewayError> {
        lock_unpoisoned(&self.requests).push(request.clone());

        if let Some(error) = &self.open_failure {
            return Err(error.clone());
        }

        Ok(Box::new(self.script.clone().into_iter()))
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(session_id: &str) -> InvocationRequest {
        InvocationRequest {
            agent_id: "agent-1".to_string(),
            alias_id: "alias-1".to_string(),
            session_id: session_id.to_string(),
            prompt: "prompt".to_string(),
            enable_trace: true,
        }
    }

    #[test]
    fn replays_script_in_order_and_records_requests() {
        let gateway = ScriptedGateway::new(vec![
            StreamEvent::text("Hel"),
            StreamEvent::text("lo"),
        ]);
        let credentials = gateway.credentials().expect("credentials available");

        let stream = gateway
            .open_invocation(&credentials, &request("session-1"))
            .expect("stream opens");
        let events: Vec<_> = stream.collect();

        assert_eq!(
            events,
            vec![Ok(StreamEvent::text("Hel")), Ok(StreamEvent::text("lo"))]
        );
        assert_eq!(gateway.requests(), vec![request("session-1")]);
    }

    #[test]
    fn without_credentials_fails_before_any_stream() {
        let gateway = ScriptedGateway::new(Vec::new()).without_credentials();

        assert_eq!(gateway.credentials(), Err(GatewayError::MissingCredentials));
        assert!(gateway.requests().is_empty());
    }

    #[test]
    fn failing_open_still_records_the_request() {
        let gateway =
            ScriptedGateway::new(Vec::new()).failing_open(GatewayError::EmptyResponse);
        let credentials = gateway.credentials().expect("credentials available");

        let result = gateway.open_invocation(&credentials, &request("session-2"));
        assert!(matches!(result, Err(GatewayError::EmptyResponse)));
        assert_eq!(gateway.requests().len(), 1);
    }

    #[test]
    fn each_invocation_replays_the_full_script() {
        let gateway = ScriptedGateway::new(vec![StreamEvent::text("again")]);
        let credentials = gateway.credentials().expect("credentials available");

        for turn in 0..2 {
            let stream = gateway
                .open_invocation(&credentials, &request("session-3"))
                .expect("stream opens");
            assert_eq!(stream.count(), 1, "turn {turn}");
        }

        assert_eq!(gateway.requests().len(), 2);
    }
}
