//! Host abstraction for the suggestion engine.
//!
//! The engine never touches the document directly. Hosts (a browser
//! contenteditable bridge, a native text widget, the in-memory
//! [`BufferHost`](crate::buffer_host::BufferHost)) hand it value snapshots of
//! the text before the cursor and apply the edits it asks for.

use std::borrow::Cow;

use smol_str::SmolStr;
use web_time::Instant;

use crate::replacement::{ReplacementCommand, TriggerSpan};
use crate::strings::Localizer;

/// Error type for host operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HostError(pub String);

impl From<&str> for HostError {
    fn from(s: &str) -> Self {
        HostError(s.to_string())
    }
}

impl From<String> for HostError {
    fn from(s: String) -> Self {
        HostError(s)
    }
}

/// Editing surface the engine is attached to.
///
/// Key handlers are expected to be called after the typed character has
/// reached the document, so [`trigger_span`](EmojiHost::trigger_span) already
/// includes it.
pub trait EmojiHost: Localizer {
    /// The run of non-whitespace text ending at the cursor.
    ///
    /// Returns an empty span when the cursor follows whitespace or sits at
    /// the start of a block, and `None` when the cursor context can't be
    /// determined (no selection, selection not collapsed, ...).
    fn trigger_span(&self) -> Option<TriggerSpan>;

    /// Remove `command.remove`, insert `command.insert` and move the caret to
    /// `command.caret`, all or nothing.
    fn apply_replacement(&mut self, command: &ReplacementCommand) -> Result<(), HostError>;

    /// Current time, used for debounce deadlines.
    fn now(&self) -> Instant {
        emoji_common::perf::now()
    }

    /// Just the text of [`trigger_span`](EmojiHost::trigger_span).
    fn trigger_span_text(&self) -> Option<SmolStr> {
        self.trigger_span().map(|span| span.text)
    }

    /// Resolve a display string, falling back to the key itself.
    fn display_string<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.resolve(key).unwrap_or(Cow::Borrowed(key))
    }
}
