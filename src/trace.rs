//! Interpretation of opaque orchestration-trace records.
//!
//! Trace payloads arrive as heterogeneous JSON from the gateway. They
//! are decoded into all-optional structs with explicit presence
//! checks; any absent or malformed aspect degrades to "no entry",
//! never to an error.

use serde::Deserialize;
use serde_json::Value;

use crate::message::TranscriptEntry;
use crate::tools::{self, Parameter};

/// Which aspect of the agent's internals a trace entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// The agent's reasoning text.
    Thinking,
    /// A tool invocation the agent kicked off.
    Action,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Rationale {
    text: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActionGroupInvocation {
    function: Option<String>,
    parameters: Option<Vec<Parameter>>,
}

/// Extracts transcript entries from one opaque trace record.
///
/// Emits at most one reasoning entry and at most one action entry, in
/// that order. Absent records, non-object payloads, and records
/// without the orchestration wrapper are normal cases and produce the
/// empty sequence. The two aspects decode independently: a malformed
/// action sub-record still lets a well-formed rationale through, and
/// vice versa.
#[must_use]
pub fn interpret(record: Option<&Value>) -> Vec<TranscriptEntry> {
    let Some(orchestration) = record.and_then(|value| value.get("orchestrationTrace")) else {
        return Vec::new();
    };

    let mut entries = Vec::new();

    if let Some(rationale) = decode::<Rationale>(orchestration.get("rationale")) {
        let text = coerce_text(&rationale.text);
        if !text.is_empty() {
            entries.push(TranscriptEntry::trace(text, TraceKind::Thinking));
        }
    }

    let action = orchestration
        .get("invocationInput")
        .and_then(|input| input.get("actionGroupInvocationInput"));
    if let Some(action) = decode::<ActionGroupInvocation>(action) {
        if let Some(function) = action.function.filter(|id| !id.is_empty()) {
            entries.push(action_entry(&function, action.parameters.as_deref()));
        }
    }

    entries
}

fn decode<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    serde_json::from_value(value?.clone()).ok()
}

fn action_entry(function: &str, parameters: Option<&[Parameter]>) -> TranscriptEntry {
    let label = tools::display_name(function);
    let summary = if tools::suppresses_parameters(function) {
        String::new()
    } else {
        tools::summarize_parameters(parameters.unwrap_or(&[]))
    };

    let content = if summary.is_empty() {
        format!("{label}を実行しています")
    } else {
        format!("{label}を実行しています {summary}")
    };

    TranscriptEntry::trace(content, TraceKind::Action)
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
