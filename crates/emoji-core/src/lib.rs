//! emoji-core: inline emoji suggestions for text editors, without framework
//! dependencies.
//!
//! This crate provides:
//! - `Catalog` - the immutable emoji table, grouped by family
//! - `Matcher` - shortcut, whole-keyword and keyword-prefix search
//! - `EmojiSuggester` - the quick/full picker state machine with debounced
//!   search, driven through the `EmojiHost` trait
//! - `ReplacementCommand` - the document edit produced on confirm
//! - `BufferHost` - a ropey-backed reference host with undo

pub mod buffer_host;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod events;
pub mod host;
pub mod input;
pub mod matcher;
pub mod replacement;
pub mod session;
pub mod strings;
pub mod text;
pub mod undo;

pub use buffer_host::BufferHost;
pub use catalog::{Catalog, EmojiId, EmojiRecord, FamilyId, UnknownFamily};
pub use config::SuggestionConfig;
pub use debounce::{DebounceToken, Debouncer};
pub use events::{CloseReason, PickerMode, SuggestionEvent};
pub use host::{EmojiHost, HostError};
pub use input::{KeyHandling, NavDirection, SuggestionKey, dispatch_key};
pub use matcher::{MatchTier, Matcher, RankedMatch, TRIGGER};
pub use replacement::{CharRange, ReplacementCommand, ReplacementError, TriggerSpan};
pub use session::{Candidate, EmojiSuggester, SuggestionSession, SuggestionState};
pub use smol_str::SmolStr;
pub use strings::{Localizer, SHOW_MORE_KEY, StringTable};
pub use text::{EditorRope, TextBuffer};
pub use undo::{UndoManager, UndoableBuffer};
