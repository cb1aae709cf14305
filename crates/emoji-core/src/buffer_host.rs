//! In-memory [`EmojiHost`] over an undoable rope.
//!
//! Used by the CLI and the integration tests. The caller edits the document
//! through the typing helpers and then forwards the matching key to the
//! engine, the same order a real editor follows.

use std::borrow::Cow;
use std::time::Duration;

use web_time::Instant;

use crate::host::{EmojiHost, HostError};
use crate::replacement::{ReplacementCommand, TriggerSpan};
use crate::strings::{Localizer, StringTable};
use crate::text::{EditorRope, TextBuffer};
use crate::undo::{UndoManager, UndoableBuffer};

const UNDO_STEPS: usize = 100;

#[derive(Debug, Clone)]
pub struct BufferHost<T = EditorRope> {
    buffer: UndoableBuffer<T>,
    /// Char offset of the collapsed caret.
    cursor: usize,
    strings: StringTable,
    /// Fixed time reported by [`EmojiHost::now`]; wall clock when `None`.
    clock: Option<Instant>,
}

impl BufferHost<EditorRope> {
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Document with `text`, caret at the end.
    pub fn from_text(text: &str) -> Self {
        Self::with_buffer(EditorRope::from_str(text))
    }
}

impl Default for BufferHost<EditorRope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TextBuffer> BufferHost<T> {
    pub fn with_buffer(buffer: T) -> Self {
        let cursor = buffer.len_chars();
        Self {
            buffer: UndoableBuffer::new(buffer, UNDO_STEPS),
            cursor,
            strings: StringTable::english(),
            clock: None,
        }
    }

    pub fn with_strings(mut self, strings: StringTable) -> Self {
        self.strings = strings;
        self
    }

    /// Freeze time; it only moves through [`advance`](Self::advance).
    pub fn with_manual_clock(mut self) -> Self {
        self.clock = Some(emoji_common::perf::now());
        self
    }

    /// Move the manual clock forward. No-op on the wall clock.
    pub fn advance(&mut self, by: Duration) {
        if let Some(clock) = self.clock.as_mut() {
            *clock += by;
        }
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the caret, clamped to the document.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.buffer.len_chars());
    }

    pub fn type_char(&mut self, ch: char) {
        let mut utf8 = [0; 4];
        self.type_str(ch.encode_utf8(&mut utf8));
    }

    pub fn type_str(&mut self, text: &str) {
        self.buffer.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    /// Delete the char before the caret. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buffer.delete(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        true
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.buffer.undo();
        self.set_cursor(self.cursor);
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.buffer.redo();
        self.set_cursor(self.cursor);
        redone
    }
}

impl<T: TextBuffer> Localizer for BufferHost<T> {
    fn resolve(&self, key: &str) -> Option<Cow<'_, str>> {
        self.strings.resolve(key)
    }
}

impl<T: TextBuffer> EmojiHost for BufferHost<T> {
    fn trigger_span(&self) -> Option<TriggerSpan> {
        let start = self.buffer.word_start_before(self.cursor);
        let text = self.buffer.slice(start..self.cursor)?;
        Some(TriggerSpan::new(start, text))
    }

    fn apply_replacement(&mut self, command: &ReplacementCommand) -> Result<(), HostError> {
        let range = command.remove.start..command.remove.end;
        let current = self.buffer.slice(range.clone()).ok_or_else(|| {
            HostError(format!(
                "range {}..{} is outside the document",
                range.start, range.end
            ))
        })?;
        if current != command.removed_text {
            return Err(HostError(format!(
                "expected {:?} at {}..{}, found {:?}",
                command.removed_text, range.start, range.end, current
            )));
        }

        self.buffer.replace(range, &command.insert);
        self.set_cursor(command.caret);
        tracing::trace!(caret = self.cursor, "replacement applied");
        Ok(())
    }

    fn now(&self) -> Instant {
        self.clock.unwrap_or_else(emoji_common::perf::now)
    }
}
