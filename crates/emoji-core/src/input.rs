//! Key input for the suggestion engine.
//!
//! Hosts translate their native key events into [`SuggestionKey`] and feed
//! them through [`dispatch_key`]. The returned [`KeyHandling`] says whether
//! the host should suppress the key's default behaviour.

use crate::host::EmojiHost;
use crate::session::EmojiSuggester;

/// Direction of a picker navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Whether the engine consumed a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyHandling {
    /// The picker used the key; the host must not apply its default action.
    Handled,
    /// The key belongs to the document.
    PassThrough,
}

impl KeyHandling {
    pub fn is_handled(self) -> bool {
        self == KeyHandling::Handled
    }
}

/// Semantic key input.
///
/// `Trigger` and `Char` are sent after the character reached the document.
/// `KeyUp` is sent after any other edit (backspace, paste, caret moves) so
/// the engine can re-read the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Trigger,
    Char(char),
    Navigate(NavDirection),
    /// Enter, or space while a picker is open.
    Confirm,
    Escape,
    FocusLost,
    KeyUp,
}

/// Feed one key to the engine.
///
/// This is the central dispatch point for all suggestion input.
pub fn dispatch_key<H: EmojiHost + ?Sized>(
    engine: &mut EmojiSuggester,
    host: &mut H,
    key: SuggestionKey,
) -> KeyHandling {
    match key {
        SuggestionKey::Trigger => engine.on_trigger_character_typed(&*host),
        SuggestionKey::Char(ch) => engine.on_character_typed(ch, &*host),
        SuggestionKey::Navigate(direction) => engine.on_navigation_key(direction),
        SuggestionKey::Confirm => engine.on_confirm_key(host),
        SuggestionKey::Escape => engine.on_escape_key(),
        SuggestionKey::FocusLost => {
            engine.on_focus_lost();
            KeyHandling::PassThrough
        }
        SuggestionKey::KeyUp => {
            engine.on_key_up(&*host);
            KeyHandling::PassThrough
        }
    }
}
