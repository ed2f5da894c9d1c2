//! Agent target configuration sourced from the environment.

use std::fmt;

pub const AGENT_ID_ENV_VAR: &str = "AGENT_CHAT_AGENT_ID";
pub const AGENT_ALIAS_ID_ENV_VAR: &str = "AGENT_CHAT_AGENT_ALIAS_ID";
pub const REGION_ENV_VAR: &str = "AGENT_CHAT_REGION";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Identifies the hosted agent a session talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    pub agent_id: String,
    pub alias_id: String,
    pub region: String,
}

/// A required agent-target variable was unset or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEnvVar(pub &'static str);

impl fmt::Display for MissingEnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "environment variable {} is required", self.0)
    }
}

impl std::error::Error for MissingEnvVar {}

impl AgentTarget {
    /// Builds a target from `AGENT_CHAT_*` environment variables.
    ///
    /// Agent id and alias id are required; the region falls back to
    /// [`DEFAULT_REGION`] when unset or blank. Values are trimmed.
    pub fn from_env() -> Result<Self, MissingEnvVar> {
        Ok(Self {
            agent_id: required_env(AGENT_ID_ENV_VAR)?,
            alias_id: required_env(AGENT_ALIAS_ID_ENV_VAR)?,
            region: optional_env(REGION_ENV_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }

    /// Fixed target for local runs against the scripted gateway.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            agent_id: "demo-agent".to_string(),
            alias_id: "demo-alias".to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

fn required_env(name: &'static str) -> Result<String, MissingEnvVar> {
    optional_env(name).ok_or(MissingEnvVar(name))
}

fn optional_env(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
