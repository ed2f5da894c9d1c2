//! Catalog of agent tools and display helpers for their invocations.

use serde::Deserialize;

/// Display metadata for one backend tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Suppresses the parameter summary in action bubbles. Set for
    /// tools whose parameter values are long and not useful to show.
    pub suppress_parameters: bool,
}

/// Fixed catalog of the tools the hosted agent exposes.
pub static TOOL_CATALOG: [ToolDescriptor; 4] = [
    ToolDescriptor {
        id: "search-web",
        label: "Web検索",
        suppress_parameters: false,
    },
    ToolDescriptor {
        id: "search-knowledge-base",
        label: "ナレッジベース検索",
        suppress_parameters: false,
    },
    ToolDescriptor {
        id: "create-pptx",
        label: "スライド作成",
        suppress_parameters: false,
    },
    ToolDescriptor {
        id: "send-email",
        label: "メール送信",
        // The generated URL parameter is long and noisy on screen.
        suppress_parameters: true,
    },
];

fn descriptor(function_id: &str) -> Option<&'static ToolDescriptor> {
    TOOL_CATALOG.iter().find(|tool| tool.id == function_id)
}

/// Translates a backend function identifier into its display label.
///
/// Total: unknown identifiers are returned unchanged.
#[must_use]
pub fn display_name(function_id: &str) -> &str {
    descriptor(function_id).map_or(function_id, |tool| tool.label)
}

/// Returns true when the tool's parameters must not appear in bubbles.
#[must_use]
pub fn suppresses_parameters(function_id: &str) -> bool {
    descriptor(function_id).is_some_and(|tool| tool.suppress_parameters)
}

/// One name/value pair attached to a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Produces a short display summary for a tool's parameters.
///
/// A parameter literally named `query` wins and is quoted; otherwise
/// the first parameter is shown as `name: value`; an empty sequence
/// summarizes to the empty string. Pure and total.
#[must_use]
pub fn summarize_parameters(params: &[Parameter]) -> String {
    if let Some(query) = params.iter().find(|param| param.name == "query") {
        return format!("「{}」", query.value);
    }

    match params.first() {
        Some(first) => format!("{}: {}", first.name, first.value),
        None => String::new(),
    }
}
