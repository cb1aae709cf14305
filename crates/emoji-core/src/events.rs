//! Notifications the engine queues for its host.

use smol_str::SmolStr;
use web_time::Instant;

use crate::debounce::DebounceToken;
use crate::replacement::{ReplacementCommand, ReplacementError};

/// Which picker is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerMode {
    /// Compact strip next to the caret.
    QuickPick,
    /// Full grid with family tabs.
    FullPick,
}

/// Why a suggestion session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    Escape,
    FocusLost,
    /// An emoji replaced the trigger token.
    Replaced,
    /// The token gained whitespace, a second trigger, or lost its trigger.
    MalformedToken,
    /// The document no longer matched the token at confirm time.
    ReplacementRejected,
    /// The host could not report the text before the cursor.
    ContextLost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionEvent {
    Opened { session: u64 },
    /// A search is due at `deadline`; timer-driven hosts pass `token` to
    /// [`fire_debounce`](crate::EmojiSuggester::fire_debounce).
    SearchScheduled { token: DebounceToken, deadline: Instant },
    SearchExecuted { query: SmolStr, matches: usize },
    CandidatesChanged,
    ModeChanged(PickerMode),
    ReplacementRequested(ReplacementCommand),
    ReplacementRejected(ReplacementError),
    Closed(CloseReason),
}
