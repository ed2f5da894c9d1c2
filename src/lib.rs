//! Chat client core for a hosted streaming agent.
//!
//! One [`session::ChatSession`] owns a per-page-load session id, the
//! append-only transcript, and the in-flight assistant buffer. Every
//! submission opens one streamed invocation through the external
//! [`agent_gateway::AgentGateway`] boundary and folds the event stream
//! into typed transcript entries:
//!
//! - text fragments accumulate in the in-flight buffer and publish
//!   live after every event,
//! - trace records become reasoning/action bubbles via
//!   [`trace::interpret`],
//! - unknown or empty events are ignored.
//!
//! [`view::project`] derives the renderable list from reducer state;
//! it is pure and owns no state of its own.
//!
//! ## Agent target bootstrap
//!
//! Real targets come from the environment:
//!
//! - `AGENT_CHAT_AGENT_ID` (required)
//! - `AGENT_CHAT_AGENT_ALIAS_ID` (required)
//! - `AGENT_CHAT_REGION` (optional, defaults to `us-east-1`)
//!
//! Local runs and tests use the scripted gateway from
//! `agent_gateway_mock` and [`config::AgentTarget::demo`].

pub mod config;
pub mod message;
pub mod session;
pub mod tools;
pub mod trace;
pub mod view;
