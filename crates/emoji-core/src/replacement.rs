//! Turning a confirmed emoji into a document edit.
//!
//! A [`ReplacementCommand`] removes exactly the trigger token (trigger
//! character plus typed query) and inserts the glyph in its place. It is only
//! built when the host's current span still reads as the token the session
//! recorded; otherwise the edit would land on stale offsets.

use smol_str::SmolStr;

use crate::catalog::{EmojiId, EmojiRecord};
use crate::host::HostError;

/// A range in the document, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<std::ops::Range<usize>> for CharRange {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<CharRange> for std::ops::Range<usize> {
    fn from(r: CharRange) -> Self {
        r.start..r.end
    }
}

/// The word before the cursor, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSpan {
    pub range: CharRange,
    pub text: SmolStr,
}

impl TriggerSpan {
    /// Span of `text` starting at `start`; the end follows from its length.
    pub fn new(start: usize, text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self {
            range: CharRange::new(start, end),
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Edit that swaps a trigger token for an emoji glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementCommand {
    pub emoji: EmojiId,
    /// Range to delete.
    pub remove: CharRange,
    /// Text expected in `remove`. Hosts re-check it before mutating.
    pub removed_text: SmolStr,
    pub insert: SmolStr,
    /// Where the caret goes afterwards: right after the inserted glyph.
    pub caret: usize,
}

impl ReplacementCommand {
    /// Build the edit replacing `span` with `record`'s glyph.
    ///
    /// Fails when the span no longer reads as `expected_token` or its range
    /// doesn't cover the span text exactly.
    pub fn for_span(
        record: &EmojiRecord,
        span: &TriggerSpan,
        expected_token: &str,
    ) -> Result<Self, ReplacementError> {
        if span.text != expected_token {
            return Err(ReplacementError::StaleTarget {
                expected: expected_token.into(),
                found: span.text.clone(),
            });
        }
        let len = span.text.chars().count();
        if span.range.len() != len || span.range.end < span.range.start {
            return Err(ReplacementError::SpanLengthMismatch {
                start: span.range.start,
                end: span.range.end,
                len,
            });
        }

        Ok(Self {
            emoji: record.id(),
            remove: span.range,
            removed_text: span.text.clone(),
            insert: record.glyph.clone(),
            caret: span.range.start + record.glyph.chars().count(),
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplacementError {
    #[error("host reported no text before the cursor")]
    NoTriggerSpan,

    #[error("trigger token changed: expected {expected:?}, found {found:?}")]
    StaleTarget { expected: SmolStr, found: SmolStr },

    #[error("span {start}..{end} does not cover {len} chars")]
    SpanLengthMismatch { start: usize, end: usize, len: usize },

    #[error("host rejected replacement: {0}")]
    Host(#[from] HostError),
}
