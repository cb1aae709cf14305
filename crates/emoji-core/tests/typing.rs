// End-to-end typing flows through the reference host.
//
// Each keystroke is applied to the document first and then dispatched to the
// engine, the order a real editor uses. Time only moves through the host's
// manual clock.

use std::time::Duration;

use emoji_core::{
    BufferHost, CloseReason, EmojiHost, EmojiSuggester, KeyHandling, NavDirection, PickerMode,
    SuggestionEvent, SuggestionKey, SuggestionState, dispatch_key,
};

fn setup(text: &str) -> (EmojiSuggester, BufferHost) {
    (
        EmojiSuggester::default(),
        BufferHost::from_text(text).with_manual_clock(),
    )
}

fn type_text(engine: &mut EmojiSuggester, host: &mut BufferHost, text: &str) {
    for ch in text.chars() {
        host.type_char(ch);
        dispatch_key(engine, host, SuggestionKey::Char(ch));
        host.advance(Duration::from_millis(40));
    }
}

fn settle(engine: &mut EmojiSuggester, host: &mut BufferHost) {
    host.advance(Duration::from_millis(300));
    engine.poll(&*host);
}

fn glyphs(engine: &EmojiSuggester) -> String {
    engine
        .candidates()
        .iter()
        .map(|c| c.glyph(engine.catalog()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn close_reason(events: &[SuggestionEvent]) -> Option<CloseReason> {
    events.iter().rev().find_map(|e| match e {
        SuggestionEvent::Closed(reason) => Some(*reason),
        _ => None,
    })
}

#[test]
fn keyword_search_and_confirm() {
    let (mut engine, mut host) = setup("Good ");
    type_text(&mut engine, &mut host, ":dog");
    settle(&mut engine, &mut host);

    assert_eq!(engine.search_text(), Some(":dog"));
    assert_eq!(glyphs(&engine), "🐶");

    let handled = dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);
    assert_eq!(handled, KeyHandling::Handled);
    assert_eq!(host.text(), "Good 🐶");
    assert_eq!(host.cursor(), 6);
    assert_eq!(engine.state(), SuggestionState::Inactive);
    assert_eq!(close_reason(&engine.drain_events()), Some(CloseReason::Replaced));
}

#[test]
fn undo_restores_the_typed_token() {
    let (mut engine, mut host) = setup("");
    type_text(&mut engine, &mut host, ":heart");
    settle(&mut engine, &mut host);
    insta::assert_snapshot!(glyphs(&engine), @"😍 ❤️ 💔");

    dispatch_key(&mut engine, &mut host, SuggestionKey::Navigate(NavDirection::Right));
    dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);
    assert_eq!(host.text(), "❤️");

    assert!(host.undo());
    assert_eq!(host.text(), ":heart");
}

#[test]
fn shortcut_comes_first() {
    let (mut engine, mut host) = setup("thanks ");
    type_text(&mut engine, &mut host, ":)");
    settle(&mut engine, &mut host);

    assert_eq!(engine.candidates()[0].glyph(engine.catalog()), "🙂");
    dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);
    assert_eq!(host.text(), "thanks 🙂");
}

#[test]
fn typing_fast_searches_once() {
    let (mut engine, mut host) = setup("");
    type_text(&mut engine, &mut host, ":sun");
    engine.drain_events();

    host.advance(Duration::from_millis(259));
    assert!(!engine.poll(&host));
    assert_eq!(glyphs(&engine), "🙂 😂 ❤️ 👍 🎉 …");

    host.advance(Duration::from_millis(1));
    assert!(engine.poll(&host));

    let searches: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, SuggestionEvent::SearchExecuted { .. }))
        .collect();
    assert_eq!(searches.len(), 1);
    assert!(engine.candidates().iter().all(|c| !c.is_show_more()));
}

#[test]
fn timer_token_from_events_fires_once() {
    let (mut engine, mut host) = setup("");
    type_text(&mut engine, &mut host, ":ca");
    let tokens: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            SuggestionEvent::SearchScheduled { token, .. } => Some(token),
            _ => None,
        })
        .collect();
    assert_eq!(tokens.len(), 2);

    // Timers armed for earlier keystrokes fire first and do nothing.
    assert!(!engine.fire_debounce(tokens[0], host.strings()));
    assert!(engine.fire_debounce(tokens[1], host.strings()));
    assert!(!engine.fire_debounce(tokens[1], host.strings()));
}

#[test]
fn show_more_then_grid_navigation() {
    let (mut engine, mut host) = setup("hi ");
    type_text(&mut engine, &mut host, ":");
    for _ in 0..5 {
        dispatch_key(&mut engine, &mut host, SuggestionKey::Navigate(NavDirection::Right));
    }
    dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);
    assert_eq!(engine.state(), SuggestionState::FullPick);
    assert_eq!(host.text(), "hi :");
    assert!(
        engine
            .drain_events()
            .contains(&SuggestionEvent::ModeChanged(PickerMode::FullPick))
    );

    dispatch_key(&mut engine, &mut host, SuggestionKey::Navigate(NavDirection::Down));
    dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);
    assert_eq!(host.text(), "hi 😉");
}

#[test]
fn trigger_inside_a_word_does_nothing() {
    let (mut engine, mut host) = setup("lunch at 12");
    type_text(&mut engine, &mut host, ":30");
    assert_eq!(engine.state(), SuggestionState::Inactive);
    assert!(engine.drain_events().is_empty());
    assert_eq!(host.text(), "lunch at 12:30");
}

#[test]
fn space_and_backspace_end_the_session() {
    let (mut engine, mut host) = setup("");
    type_text(&mut engine, &mut host, ":ok ");
    assert_eq!(engine.state(), SuggestionState::Inactive);
    assert_eq!(
        close_reason(&engine.drain_events()),
        Some(CloseReason::MalformedToken)
    );

    type_text(&mut engine, &mut host, ":");
    assert!(engine.is_active());
    host.backspace();
    dispatch_key(&mut engine, &mut host, SuggestionKey::KeyUp);
    assert_eq!(engine.state(), SuggestionState::Inactive);
    assert_eq!(host.text(), ":ok ");
}

#[test]
fn escape_leaves_the_token_alone() {
    let (mut engine, mut host) = setup("");
    type_text(&mut engine, &mut host, ":cat");
    let handled = dispatch_key(&mut engine, &mut host, SuggestionKey::Escape);
    assert!(handled.is_handled());

    settle(&mut engine, &mut host);
    type_text(&mut engine, &mut host, "s");
    assert_eq!(engine.state(), SuggestionState::Inactive);
    assert_eq!(host.text(), ":cats");
    assert_eq!(
        dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm),
        KeyHandling::PassThrough
    );
}

#[test]
fn caret_moved_without_notice_is_rejected() {
    let (mut engine, mut host) = setup("one two");
    type_text(&mut engine, &mut host, " :dog");
    settle(&mut engine, &mut host);
    engine.drain_events();

    host.set_cursor(3);
    dispatch_key(&mut engine, &mut host, SuggestionKey::Confirm);

    assert_eq!(host.text(), "one two :dog");
    let events = engine.drain_events();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, SuggestionEvent::ReplacementRejected(_)))
    );
    assert_eq!(close_reason(&events), Some(CloseReason::ReplacementRejected));
    assert_eq!(host.trigger_span_text().as_deref(), Some("one"));
}
