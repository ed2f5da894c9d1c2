//! Pure projection from session state to an ordered render list.

use crate::message::{Role, TranscriptEntry};
use crate::trace::TraceKind;

/// Static placeholder shown while the transcript is empty.
pub const WELCOME_MESSAGE: &str = "Bedrock Agentsに資料作成をまかせよう！";
/// Placeholder appended while the agent works without visible output.
pub const THINKING_MESSAGE: &str = "考え中…";
/// Input-field hint text.
pub const INPUT_PLACEHOLDER: &str = "例：「KAGのみのるんについてパワポにまとめて」";

/// One renderable item, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderItem<'a> {
    /// [`WELCOME_MESSAGE`] placeholder, shown alone.
    Welcome,
    /// A finalized transcript entry.
    Entry(&'a TranscriptEntry),
    /// The live in-flight assistant text, never part of the transcript.
    Streaming(&'a str),
    /// [`THINKING_MESSAGE`] placeholder.
    Thinking,
}

/// Derives the ordered render list from current reducer state.
///
/// Pure: equal inputs produce equal lists. The thinking placeholder
/// appears only while loading with an empty buffer, a non-empty
/// transcript, and a most recent entry that is not a trace bubble
/// (a trace bubble already signals activity).
#[must_use]
pub fn project<'a>(
    transcript: &'a [TranscriptEntry],
    streaming_text: &'a str,
    is_loading: bool,
) -> Vec<RenderItem<'a>> {
    if transcript.is_empty() && streaming_text.is_empty() {
        return vec![RenderItem::Welcome];
    }

    let mut items: Vec<RenderItem<'a>> = transcript.iter().map(RenderItem::Entry).collect();

    if !streaming_text.is_empty() {
        items.push(RenderItem::Streaming(streaming_text));
    }

    let last_is_trace = transcript
        .last()
        .is_some_and(|entry| entry.role == Role::Trace);
    if is_loading && streaming_text.is_empty() && !transcript.is_empty() && !last_is_trace {
        items.push(RenderItem::Thinking);
    }

    items
}

/// Returns the style class for a transcript entry.
///
/// Trace entries style as assistant bubbles, with one extra
/// distinction for action traces.
#[must_use]
pub fn style_class(entry: &TranscriptEntry) -> &'static str {
    match (entry.role, entry.trace_kind) {
        (Role::User, _) => "user",
        (Role::Trace, Some(TraceKind::Action)) => "assistant trace-action",
        _ => "assistant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_shows_only_the_welcome_placeholder() {
        assert_eq!(project(&[], "", false), vec![RenderItem::Welcome]);
        assert_eq!(project(&[], "", true), vec![RenderItem::Welcome]);
    }

    #[test]
    fn streaming_text_suppresses_the_welcome_placeholder() {
        let items = project(&[], "partial", false);
        assert_eq!(items, vec![RenderItem::Streaming("partial")]);
    }

    #[test]
    fn entries_render_in_insertion_order_before_the_live_item() {
        let transcript = vec![
            TranscriptEntry::user("prompt"),
            TranscriptEntry::trace("thinking", TraceKind::Thinking),
        ];

        let items = project(&transcript, "Hel", true);
        assert_eq!(
            items,
            vec![
                RenderItem::Entry(&transcript[0]),
                RenderItem::Entry(&transcript[1]),
                RenderItem::Streaming("Hel"),
            ]
        );
    }

    #[test]
    fn thinking_placeholder_requires_loading_and_an_empty_buffer() {
        let transcript = vec![TranscriptEntry::user("prompt")];

        assert_eq!(
            project(&transcript, "", true).last(),
            Some(&RenderItem::Thinking)
        );
        assert!(!project(&transcript, "", false).contains(&RenderItem::Thinking));
        assert!(!project(&transcript, "text", true).contains(&RenderItem::Thinking));
    }

    #[test]
    fn thinking_placeholder_is_suppressed_right_after_a_trace_entry() {
        let transcript = vec![
            TranscriptEntry::user("prompt"),
            TranscriptEntry::trace("Web検索を実行しています", TraceKind::Action),
        ];

        assert!(!project(&transcript, "", true).contains(&RenderItem::Thinking));
    }

    #[test]
    fn projection_is_idempotent_on_unchanged_state() {
        let transcript = vec![
            TranscriptEntry::user("prompt"),
            TranscriptEntry::assistant("answer"),
        ];

        assert_eq!(project(&transcript, "", true), project(&transcript, "", true));
    }

    #[test]
    fn style_classes_match_the_original_bubble_styling() {
        assert_eq!(style_class(&TranscriptEntry::user("p")), "user");
        assert_eq!(style_class(&TranscriptEntry::assistant("a")), "assistant");
        assert_eq!(
            style_class(&TranscriptEntry::trace("t", TraceKind::Thinking)),
            "assistant"
        );
        assert_eq!(
            style_class(&TranscriptEntry::trace("t", TraceKind::Action)),
            "assistant trace-action"
        );
    }
}
