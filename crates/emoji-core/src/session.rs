//! The suggestion state machine.
//!
//! An [`EmojiSuggester`] belongs to one editing surface. It is either
//! inactive or holds a [`SuggestionSession`] in quick-pick or full-pick
//! mode:
//!
//! ```text
//! Inactive --trigger typed at token start--> QuickPick
//! QuickPick --confirm on "show more" / open_full_picker--> FullPick
//! QuickPick|FullPick --confirm emoji / escape / focus lost / malformed token--> Inactive
//! ```
//!
//! Keystrokes inside a session only reschedule a debounced search; the
//! candidate list is replaced wholesale when the search runs, so between a
//! keystroke and its search the candidates may lag behind the token.

use std::borrow::Cow;
use std::sync::Arc;

use smol_str::SmolStr;
use web_time::Instant;

use crate::catalog::{Catalog, EmojiId, FamilyId};
use crate::config::SuggestionConfig;
use crate::debounce::{DebounceToken, Debouncer};
use crate::events::{CloseReason, PickerMode, SuggestionEvent};
use crate::host::EmojiHost;
use crate::input::{KeyHandling, NavDirection};
use crate::matcher::Matcher;
use crate::replacement::{ReplacementCommand, ReplacementError};
use crate::strings::{Localizer, SHOW_MORE_KEY};

/// Glyph shown for the "show more" entry.
pub const SHOW_MORE_GLYPH: &str = "…";

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionState {
    Inactive,
    QuickPick,
    FullPick,
}

/// One entry in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Emoji(EmojiId),
    /// Placeholder that opens the full picker.
    ShowMore,
}

impl Candidate {
    pub fn emoji(&self) -> Option<EmojiId> {
        match self {
            Candidate::Emoji(id) => Some(*id),
            Candidate::ShowMore => None,
        }
    }

    pub fn is_show_more(&self) -> bool {
        matches!(self, Candidate::ShowMore)
    }

    pub fn glyph<'c>(&self, catalog: &'c Catalog) -> &'c str {
        match self {
            Candidate::Emoji(id) => catalog.get(*id).map(|r| r.glyph.as_str()).unwrap_or(""),
            Candidate::ShowMore => SHOW_MORE_GLYPH,
        }
    }

    /// Localized description, falling back to the glyph.
    pub fn label<L: Localizer + ?Sized>(&self, catalog: &Catalog, strings: &L) -> String {
        match self {
            Candidate::Emoji(id) => catalog
                .get(*id)
                .map(|record| {
                    strings
                        .resolve(&record.description_key)
                        .map(Cow::into_owned)
                        .unwrap_or_else(|| record.glyph.to_string())
                })
                .unwrap_or_default(),
            Candidate::ShowMore => strings
                .resolve(SHOW_MORE_KEY)
                .map(Cow::into_owned)
                .unwrap_or_else(|| SHOW_MORE_GLYPH.to_string()),
        }
    }
}

/// State of an open picker.
#[derive(Debug, Clone)]
pub struct SuggestionSession {
    id: u64,
    mode: PickerMode,
    search_text: SmolStr,
    candidates: Vec<Candidate>,
    selected: Option<usize>,
    family: FamilyId,
    debouncer: Debouncer,
}

impl SuggestionSession {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// The token as typed, trigger included.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Family tab shown while browsing the full picker.
    pub fn family(&self) -> FamilyId {
        self.family
    }

    pub fn pending_search(&self) -> Option<DebounceToken> {
        self.debouncer.pending_token()
    }
}

/// Emoji suggestion engine for one editing surface.
#[derive(Debug)]
pub struct EmojiSuggester {
    catalog: Arc<Catalog>,
    config: SuggestionConfig,
    session: Option<SuggestionSession>,
    sessions_opened: u64,
    events: Vec<SuggestionEvent>,
}

impl Default for EmojiSuggester {
    fn default() -> Self {
        Self::new(Catalog::shared(), SuggestionConfig::default())
    }
}

impl EmojiSuggester {
    pub fn new(catalog: Arc<Catalog>, config: SuggestionConfig) -> Self {
        Self {
            catalog,
            config,
            session: None,
            sessions_opened: 0,
            events: Vec::new(),
        }
    }

    // === State ===

    pub fn state(&self) -> SuggestionState {
        match self.session.as_ref().map(|s| s.mode) {
            None => SuggestionState::Inactive,
            Some(PickerMode::QuickPick) => SuggestionState::QuickPick,
            Some(PickerMode::FullPick) => SuggestionState::FullPick,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SuggestionSession> {
        self.session.as_ref()
    }

    /// Current picker entries; empty when inactive.
    pub fn candidates(&self) -> &[Candidate] {
        self.session
            .as_ref()
            .map(|s| s.candidates.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.selected)
    }

    pub fn selected_candidate(&self) -> Option<Candidate> {
        let session = self.session.as_ref()?;
        session.candidates.get(session.selected?).copied()
    }

    pub fn search_text(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.search_text.as_str())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// When the pending search is due, for hosts that arm their own timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| s.debouncer.deadline())
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<SuggestionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Input ===

    /// The trigger character was just typed.
    ///
    /// Opens the quick picker when the trigger starts a new token. Typing a
    /// second trigger inside an open session ends it.
    pub fn on_trigger_character_typed<H: EmojiHost + ?Sized>(&mut self, host: &H) -> KeyHandling {
        if self.session.is_some() {
            self.close(CloseReason::MalformedToken);
            return KeyHandling::PassThrough;
        }

        let Some(span) = host.trigger_span() else {
            return KeyHandling::PassThrough;
        };
        if !span.text.chars().eq(std::iter::once(self.config.trigger)) {
            // Trigger glued to a word, e.g. "12:30".
            return KeyHandling::PassThrough;
        }

        self.sessions_opened += 1;
        let id = self.sessions_opened;
        let candidates = common_candidates(&self.catalog, &self.config);
        let selected = if candidates.is_empty() { None } else { Some(0) };
        self.session = Some(SuggestionSession {
            id,
            mode: PickerMode::QuickPick,
            search_text: span.text,
            candidates,
            selected,
            family: self.config.default_family,
            debouncer: Debouncer::new(id, self.config.debounce()),
        });
        tracing::debug!(session = id, "emoji suggestions opened");
        self.events.push(SuggestionEvent::Opened { session: id });
        self.events.push(SuggestionEvent::CandidatesChanged);
        KeyHandling::PassThrough
    }

    /// A character other than the trigger was just typed.
    pub fn on_character_typed<H: EmojiHost + ?Sized>(&mut self, ch: char, host: &H) -> KeyHandling {
        if ch == self.config.trigger {
            return self.on_trigger_character_typed(host);
        }
        if self.session.is_none() {
            return KeyHandling::PassThrough;
        }
        if ch.is_whitespace() {
            self.close(CloseReason::MalformedToken);
            return KeyHandling::PassThrough;
        }
        self.on_key_up(host);
        KeyHandling::PassThrough
    }

    /// Re-read the token from the host after any edit.
    ///
    /// Ends the session when the token is malformed or unreadable, otherwise
    /// reschedules the search if the token changed.
    pub fn on_key_up<H: EmojiHost + ?Sized>(&mut self, host: &H) {
        if self.session.is_none() {
            return;
        }
        let Some(span) = host.trigger_span() else {
            self.close(CloseReason::ContextLost);
            return;
        };
        if !self.is_well_formed(&span.text) {
            self.close(CloseReason::MalformedToken);
            return;
        }

        let now = host.now();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.search_text == span.text {
            return;
        }
        session.search_text = span.text;
        let (token, deadline) = session.debouncer.schedule(now);
        self.events
            .push(SuggestionEvent::SearchScheduled { token, deadline });
    }

    /// Move the selection. Moves past either end are ignored.
    ///
    /// The quick picker is a single row, so it leaves up/down to the host.
    pub fn on_navigation_key(&mut self, direction: NavDirection) -> KeyHandling {
        let columns = self.config.full_pick_columns as isize;
        let Some(session) = self.session.as_mut() else {
            return KeyHandling::PassThrough;
        };

        let step = match (session.mode, direction) {
            (_, NavDirection::Left) => -1,
            (_, NavDirection::Right) => 1,
            (PickerMode::QuickPick, NavDirection::Up | NavDirection::Down) => {
                return KeyHandling::PassThrough;
            }
            (PickerMode::FullPick, NavDirection::Up) => -columns,
            (PickerMode::FullPick, NavDirection::Down) => columns,
        };

        let len = session.candidates.len();
        if let Some(target) = session
            .selected
            .and_then(|current| current.checked_add_signed(step))
            .filter(|target| *target < len)
        {
            session.selected = Some(target);
        }
        KeyHandling::Handled
    }

    /// Confirm the selected entry.
    pub fn on_confirm_key<H: EmojiHost + ?Sized>(&mut self, host: &mut H) -> KeyHandling {
        match self.selected_candidate() {
            None => KeyHandling::PassThrough,
            Some(Candidate::ShowMore) => {
                self.enter_full_pick(&*host);
                KeyHandling::Handled
            }
            Some(Candidate::Emoji(id)) => {
                self.replace_with(id, host);
                KeyHandling::Handled
            }
        }
    }

    /// Select and confirm the entry at `index`, e.g. when it is clicked.
    pub fn confirm_candidate<H: EmojiHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> KeyHandling {
        let Some(session) = self.session.as_mut() else {
            return KeyHandling::PassThrough;
        };
        if index >= session.candidates.len() {
            return KeyHandling::PassThrough;
        }
        session.selected = Some(index);
        self.on_confirm_key(host)
    }

    /// Switch an open quick picker to the full picker.
    pub fn open_full_picker<H: EmojiHost + ?Sized>(&mut self, host: &H) -> bool {
        self.enter_full_pick(host)
    }

    /// Browse another family. Only applies in the full picker with an empty
    /// query.
    pub fn select_family<L: Localizer + ?Sized>(&mut self, family: FamilyId, strings: &L) -> bool {
        let trigger = self.config.trigger;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.mode != PickerMode::FullPick || !query_body(&session.search_text, trigger).is_empty()
        {
            return false;
        }
        session.family = family;
        self.run_search(strings);
        true
    }

    pub fn on_escape_key(&mut self) -> KeyHandling {
        if self.session.is_none() {
            return KeyHandling::PassThrough;
        }
        self.close(CloseReason::Escape);
        KeyHandling::Handled
    }

    pub fn on_focus_lost(&mut self) {
        self.close(CloseReason::FocusLost);
    }

    // === Debounce ===

    /// Timer callback for a scheduled search.
    ///
    /// Does nothing unless `token` is the live token of the current session.
    pub fn fire_debounce<L: Localizer + ?Sized>(&mut self, token: DebounceToken, strings: &L) -> bool {
        let fired = match self.session.as_mut() {
            Some(session) if session.id == token.owner() => session.debouncer.fire(token),
            _ => {
                tracing::trace!(owner = token.owner(), "debounce fired after session ended");
                false
            }
        };
        if fired {
            self.run_search(strings);
        }
        fired
    }

    /// Run the pending search if its deadline has passed by `host.now()`.
    pub fn poll<H: EmojiHost + ?Sized>(&mut self, host: &H) -> bool {
        let now = host.now();
        let fired = self
            .session
            .as_mut()
            .and_then(|session| session.debouncer.fire_due(now))
            .is_some();
        if fired {
            self.run_search(host);
        }
        fired
    }

    // === Internals ===

    fn is_well_formed(&self, token: &str) -> bool {
        let trigger = self.config.trigger;
        token
            .strip_prefix(trigger)
            .is_some_and(|rest| !rest.chars().any(|c| c.is_whitespace() || c == trigger))
    }

    fn enter_full_pick<L: Localizer + ?Sized>(&mut self, strings: &L) -> bool {
        let default_family = self.config.default_family;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.mode == PickerMode::FullPick {
            return true;
        }
        // The full picker searches right away.
        session.debouncer.cancel();
        session.mode = PickerMode::FullPick;
        session.family = default_family;
        tracing::debug!(session = session.id, "full emoji picker opened");
        self.events
            .push(SuggestionEvent::ModeChanged(PickerMode::FullPick));
        self.run_search(strings);
        true
    }

    /// Recompute the candidate list from scratch for the current token.
    fn run_search<L: Localizer + ?Sized>(&mut self, strings: &L) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let trigger = self.config.trigger;
        let body_is_empty = query_body(&session.search_text, trigger).is_empty();

        let mut matches = None;
        session.candidates = match (session.mode, body_is_empty) {
            (PickerMode::QuickPick, true) => common_candidates(&self.catalog, &self.config),
            (PickerMode::FullPick, true) => self
                .catalog
                .family(session.family)
                .iter()
                .map(|record| Candidate::Emoji(record.id()))
                .collect(),
            (mode, false) => {
                let results = Matcher::new(&self.catalog)
                    .with_trigger(trigger)
                    .search(&session.search_text, strings);
                matches = Some(results.len());
                let mut candidates: Vec<Candidate> = results
                    .iter()
                    .map(|record| Candidate::Emoji(record.id()))
                    .collect();
                if mode == PickerMode::QuickPick && candidates.len() > self.config.quick_pick_limit {
                    candidates.truncate(self.config.quick_pick_limit);
                    candidates.push(Candidate::ShowMore);
                }
                candidates
            }
        };
        session.selected = if session.candidates.is_empty() {
            None
        } else {
            Some(0)
        };

        if let Some(matches) = matches {
            self.events.push(SuggestionEvent::SearchExecuted {
                query: session.search_text.clone(),
                matches,
            });
        }
        self.events.push(SuggestionEvent::CandidatesChanged);
    }

    fn replace_with<H: EmojiHost + ?Sized>(&mut self, id: EmojiId, host: &mut H) {
        let Some(expected) = self.session.as_ref().map(|s| s.search_text.clone()) else {
            return;
        };
        let catalog = Arc::clone(&self.catalog);
        let Some(record) = catalog.get(id) else {
            self.reject(ReplacementError::NoTriggerSpan);
            return;
        };

        let command = host
            .trigger_span()
            .ok_or(ReplacementError::NoTriggerSpan)
            .and_then(|span| ReplacementCommand::for_span(record, &span, &expected));
        let command = match command {
            Ok(command) => command,
            Err(err) => {
                self.reject(err);
                return;
            }
        };

        self.events
            .push(SuggestionEvent::ReplacementRequested(command.clone()));
        match host.apply_replacement(&command) {
            Ok(()) => {
                tracing::debug!(glyph = %command.insert, token = %expected, "emoji inserted");
                self.close(CloseReason::Replaced);
            }
            Err(err) => self.reject(err.into()),
        }
    }

    fn reject(&mut self, err: ReplacementError) {
        tracing::warn!(error = %err, "emoji replacement rejected");
        self.events.push(SuggestionEvent::ReplacementRejected(err));
        self.close(CloseReason::ReplacementRejected);
    }

    fn close(&mut self, reason: CloseReason) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if session.debouncer.cancel().is_some() {
            tracing::trace!(session = session.id, "pending emoji search cancelled");
        }
        tracing::debug!(session = session.id, ?reason, "emoji suggestions closed");
        self.events.push(SuggestionEvent::Closed(reason));
    }
}

/// Initial quick-pick entries: the configured common glyphs plus "show more".
fn common_candidates(catalog: &Catalog, config: &SuggestionConfig) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = config
        .common_emoji
        .iter()
        .filter_map(|glyph| {
            let record = catalog.find_glyph(glyph);
            if record.is_none() {
                tracing::debug!(%glyph, "common emoji missing from catalog");
            }
            record
        })
        .take(config.quick_pick_limit)
        .map(|record| Candidate::Emoji(record.id()))
        .collect();
    candidates.push(Candidate::ShowMore);
    candidates
}

fn query_body(token: &str, trigger: char) -> &str {
    token.strip_prefix(trigger).unwrap_or(token)
}
