//! Line-oriented driver over the scripted demo gateway.
//!
//! Each submission runs one invocation to completion before the
//! projection is printed, so this driver shows final state only: the
//! live [`RenderItem::Streaming`] item appears here only when a failed
//! invocation retains the in-flight buffer. Live per-event publication
//! is exercised through [`ChatSession::streaming_text`] by the
//! projection tests, not by this binary.

use std::io::{self, BufRead, Write};

use agent_chat::config::AgentTarget;
use agent_chat::session::ChatSession;
use agent_chat::view::{self, RenderItem};
use agent_gateway_mock::ScriptedGateway;

fn main() -> io::Result<()> {
    let target = AgentTarget::from_env().unwrap_or_else(|_| AgentTarget::demo());
    let gateway = ScriptedGateway::demo();
    let mut session = ChatSession::new(target);

    render(&session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        session.on_input_replace(line?);
        session.on_submit(&gateway);
        render(&session)?;
    }

    Ok(())
}

fn render(session: &ChatSession) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let items = view::project(
        session.transcript(),
        session.streaming_text(),
        session.is_loading(),
    );
    for item in items {
        match item {
            RenderItem::Welcome => writeln!(out, "{}", view::WELCOME_MESSAGE)?,
            RenderItem::Entry(entry) => {
                writeln!(out, "[{}] {}", view::style_class(entry), entry.content)?;
            }
            RenderItem::Streaming(text) => writeln!(out, "[assistant] {text}")?,
            RenderItem::Thinking => writeln!(out, "[assistant] {}", view::THINKING_MESSAGE)?,
        }
    }

    write!(out, "> ")?;
    out.flush()
}
