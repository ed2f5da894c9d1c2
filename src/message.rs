use crate::trace::TraceKind;

/// Who a transcript entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Intermediate reasoning or tool-invocation bubble. Styled like an
    /// assistant message but never merged with adjacent assistant text.
    Trace,
}

/// One finalized message in the append-only transcript.
///
/// Entries are never mutated after creation; `trace_kind` is present
/// exactly when `role` is [`Role::Trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub trace_kind: Option<TraceKind>,
}

impl TranscriptEntry {
    /// Creates a user entry for a submitted prompt.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            trace_kind: None,
        }
    }

    /// Creates the finalized assistant entry for one invocation.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            trace_kind: None,
        }
    }

    /// Creates a trace entry of the given kind.
    #[must_use]
    pub fn trace(content: impl Into<String>, kind: TraceKind) -> Self {
        Self {
            role: Role::Trace,
            content: content.into(),
            trace_kind: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_keep_role_and_trace_kind_consistent() {
        assert_eq!(TranscriptEntry::user("hi").trace_kind, None);
        assert_eq!(TranscriptEntry::assistant("done").trace_kind, None);

        let entry = TranscriptEntry::trace("考えています", TraceKind::Thinking);
        assert_eq!(entry.role, Role::Trace);
        assert_eq!(entry.trace_kind, Some(TraceKind::Thinking));
    }
}
