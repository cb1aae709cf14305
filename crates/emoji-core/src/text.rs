//! Text storage for the reference host.
//!
//! All offsets are in Unicode scalar values (chars), not bytes or UTF-16,
//! matching the offsets carried by [`TriggerSpan`](crate::TriggerSpan).

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

/// A text buffer that supports char-offset editing.
pub trait TextBuffer {
    /// Total length in bytes (UTF-8).
    fn len_bytes(&self) -> usize;

    /// Total length in chars.
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert text at char offset.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Append text at end.
    fn push(&mut self, text: &str) {
        self.insert(self.len_chars(), text);
    }

    /// Delete char range.
    fn delete(&mut self, char_range: Range<usize>);

    /// Replace char range with text.
    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        self.delete(char_range.clone());
        self.insert(char_range.start, text);
    }

    /// Get a slice as SmolStr. Returns None if range is invalid.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Get character at offset. Returns None if out of bounds.
    fn char_at(&self, char_offset: usize) -> Option<char>;

    fn to_string(&self) -> String;

    /// Start of the run of non-whitespace chars ending at `char_offset`.
    ///
    /// Equals `char_offset` when the preceding char is whitespace or the
    /// offset is at the start of the buffer.
    fn word_start_before(&self, char_offset: usize) -> usize {
        let mut start = char_offset.min(self.len_chars());
        while start > 0 {
            match self.char_at(start - 1) {
                Some(c) if !c.is_whitespace() => start -= 1,
                _ => break,
            }
        }
        start
    }
}

/// Ropey-backed text buffer.
#[derive(Debug, Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }

    /// Get a reference to the underlying rope.
    pub fn rope(&self) -> &ropey::Rope {
        &self.rope
    }
}

impl TextBuffer for EditorRope {
    fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.rope.get_char(char_offset)
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }

    // Walk the rope's chars backwards instead of indexing per char.
    fn word_start_before(&self, char_offset: usize) -> usize {
        let end = char_offset.min(self.rope.len_chars());
        let run = self
            .rope
            .chars_at(end)
            .reversed()
            .take_while(|c| !c.is_whitespace())
            .count();
        end - run
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut rope = EditorRope::from_str("hi :dog");
        assert_eq!(rope.len_chars(), 7);

        rope.replace(3..7, "🐶");
        assert_eq!(rope.to_string(), "hi 🐶");
        assert_eq!(rope.len_chars(), 4);
        assert_eq!(rope.len_bytes(), 7);

        rope.push("!");
        rope.delete(0..3);
        assert_eq!(rope.to_string(), "🐶!");
    }

    #[test]
    fn test_slice_and_char_at() {
        let rope = EditorRope::from_str("a ❤️ b");
        // ❤️ is two chars: U+2764 U+FE0F
        assert_eq!(rope.slice(2..4).as_deref(), Some("❤️"));
        assert_eq!(rope.slice(0..100), None);
        assert_eq!(rope.char_at(0), Some('a'));
        assert_eq!(rope.char_at(6), None);
    }

    #[test]
    fn test_word_start_before() {
        let rope = EditorRope::from_str("see you at 12:30 :smi");
        assert_eq!(rope.word_start_before(21), 17);
        assert_eq!(rope.word_start_before(16), 11);
        assert_eq!(rope.word_start_before(17), 17);
        assert_eq!(rope.word_start_before(0), 0);
        assert_eq!(rope.word_start_before(99), 17);
    }
}
