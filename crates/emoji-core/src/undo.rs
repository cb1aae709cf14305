//! Undo/redo for the reference host.
//!
//! [`UndoableBuffer`] records every edit it forwards to the wrapped buffer.
//! A `replace` is one step, so undoing an emoji insertion brings back the
//! trigger token it replaced.

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::text::TextBuffer;

/// Undo/redo operations over some history.
pub trait UndoManager {
    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Perform undo. Returns true if successful.
    fn undo(&mut self) -> bool;

    /// Perform redo. Returns true if successful.
    fn redo(&mut self) -> bool;

    fn clear_history(&mut self);
}

/// A recorded edit.
#[derive(Debug, Clone)]
struct EditOperation {
    pos: usize,
    /// Empty for pure insertions.
    deleted: SmolStr,
    /// Empty for pure deletions.
    inserted: SmolStr,
}

impl EditOperation {
    fn revert<T: TextBuffer>(&self, buffer: &mut T) {
        let inserted = self.inserted.chars().count();
        buffer.replace(self.pos..self.pos + inserted, &self.deleted);
    }

    fn reapply<T: TextBuffer>(&self, buffer: &mut T) {
        let deleted = self.deleted.chars().count();
        buffer.replace(self.pos..self.pos + deleted, &self.inserted);
    }
}

/// A [`TextBuffer`] wrapper that tracks edits and provides undo/redo.
#[derive(Debug, Clone)]
pub struct UndoableBuffer<T> {
    buffer: T,
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
    max_steps: usize,
}

impl<T: TextBuffer + Default> Default for UndoableBuffer<T> {
    fn default() -> Self {
        Self::new(T::default(), 100)
    }
}

impl<T: TextBuffer> UndoableBuffer<T> {
    pub fn new(buffer: T, max_steps: usize) -> Self {
        Self {
            buffer,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_steps,
        }
    }

    pub fn inner(&self) -> &T {
        &self.buffer
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    fn record_op(&mut self, pos: usize, deleted: &str, inserted: &str) {
        self.redo_stack.clear();
        self.undo_stack.push(EditOperation {
            pos,
            deleted: deleted.to_smolstr(),
            inserted: inserted.to_smolstr(),
        });
        if self.undo_stack.len() > self.max_steps {
            let excess = self.undo_stack.len() - self.max_steps;
            self.undo_stack.drain(..excess);
        }
    }
}

impl<T: TextBuffer> TextBuffer for UndoableBuffer<T> {
    fn len_bytes(&self) -> usize {
        self.buffer.len_bytes()
    }

    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.record_op(char_offset, "", text);
        self.buffer.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        let deleted = self.buffer.slice(char_range.clone()).unwrap_or_default();
        self.record_op(char_range.start, &deleted, "");
        self.buffer.delete(char_range);
    }

    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        let deleted = self.buffer.slice(char_range.clone()).unwrap_or_default();
        self.record_op(char_range.start, &deleted, text);
        self.buffer.replace(char_range, text);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        self.buffer.slice(char_range)
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.buffer.char_at(char_offset)
    }

    fn to_string(&self) -> String {
        self.buffer.to_string()
    }

    fn word_start_before(&self, char_offset: usize) -> usize {
        self.buffer.word_start_before(char_offset)
    }
}

impl<T: TextBuffer> UndoManager for UndoableBuffer<T> {
    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(op) = self.undo_stack.pop() else {
            return false;
        };
        op.revert(&mut self.buffer);
        self.redo_stack.push(op);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(op) = self.redo_stack.pop() else {
            return false;
        };
        op.reapply(&mut self.buffer);
        self.undo_stack.push(op);
        true
    }

    fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorRope;

    #[test]
    fn test_replace_is_one_step() {
        let mut buf = UndoableBuffer::new(EditorRope::from_str("good :dog"), 100);
        buf.replace(5..9, "🐶");
        assert_eq!(buf.to_string(), "good 🐶");
        assert_eq!(buf.undo_depth(), 1);

        assert!(buf.undo());
        assert_eq!(buf.to_string(), "good :dog");
        assert!(!buf.can_undo());

        assert!(buf.redo());
        assert_eq!(buf.to_string(), "good 🐶");
    }

    #[test]
    fn test_insert_and_delete_undo() {
        let mut buf = UndoableBuffer::new(EditorRope::from_str("hello"), 100);
        buf.insert(5, " world");
        buf.delete(0..6);
        assert_eq!(buf.to_string(), "world");

        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello world");
        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello");
        assert!(buf.can_redo());

        buf.insert(0, "oh ");
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_max_steps() {
        let mut buf = UndoableBuffer::new(EditorRope::new(), 3);
        for (i, c) in ["a", "b", "c", "d"].into_iter().enumerate() {
            buf.insert(i, c);
        }

        assert!(buf.undo());
        assert!(buf.undo());
        assert!(buf.undo());
        assert!(!buf.undo());
        assert_eq!(buf.to_string(), "a");
    }
}
