//! Integration tests for screen navigation and the simulated fetch.
//!
//! Drives `AppState` with synthetic key events the way the event loop
//! does: handle a key, poll the fetch, render nothing.

#![cfg(feature = "ratatui")]

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use galleria::catalog::CatalogDb;
use galleria::config::Config;
use galleria::tui::{AppState, Screen};

fn test_state() -> AppState {
    AppState::new(CatalogDb::load().unwrap(), Config::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Polls the fetch until the current category screen has items installed.
fn wait_until_loaded(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        state.poll_fetch();
        let loading = match &state.screen {
            Screen::Category(view) => view.is_loading(),
            Screen::Home(_) => panic!("expected category screen"),
        };
        if !loading {
            return;
        }
        assert!(Instant::now() < deadline, "fetch never completed");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_home_to_category_via_keys() {
    let mut state = test_state();

    // Select the first category and open it
    state.handle_key(key(KeyCode::Enter));

    let (category_id, loading) = match &state.screen {
        Screen::Category(view) => (view.category_id().to_string(), view.is_loading()),
        Screen::Home(_) => panic!("expected category screen"),
    };
    assert_eq!(category_id, "electronics");
    assert!(loading, "items must not be visible before the delay");

    wait_until_loaded(&mut state);

    match &state.screen {
        Screen::Category(view) => {
            assert_eq!(view.items().len(), 2);
            assert!(view.items().iter().all(|i| i.category == "electronics"));
        }
        Screen::Home(_) => unreachable!(),
    }
}

#[test]
fn test_unknown_category_shows_empty_state() {
    let mut state = test_state();
    state.open_category("fashion");
    wait_until_loaded(&mut state);

    match &state.screen {
        Screen::Category(view) => {
            assert!(!view.is_loading());
            assert!(view.items().is_empty());
        }
        Screen::Home(_) => unreachable!(),
    }
}

#[test]
fn test_category_identifier_taken_verbatim() {
    let mut state = test_state();
    state.open_category("ELECTRONICS");
    wait_until_loaded(&mut state);

    match &state.screen {
        Screen::Category(view) => {
            // Matching is case-insensitive, the title is the verbatim
            // identifier with its first character upper-cased
            assert_eq!(view.items().len(), 2);
            assert_eq!(view.title(), "ELECTRONICS");
        }
        Screen::Home(_) => unreachable!(),
    }
}

#[test]
fn test_superseded_fetch_never_lands() {
    let mut state = test_state();
    state.open_category("electronics");
    state.open_category("software");
    wait_until_loaded(&mut state);

    // Only the second category's result may arrive
    match &state.screen {
        Screen::Category(view) => {
            assert_eq!(view.category_id(), "software");
            assert_eq!(view.items().len(), 3);
        }
        Screen::Home(_) => unreachable!(),
    }

    // Wait past the first request's delay; the view must not change
    std::thread::sleep(Duration::from_millis(400));
    state.poll_fetch();
    match &state.screen {
        Screen::Category(view) => {
            assert_eq!(view.items().len(), 3);
            assert!(view.items().iter().all(|i| i.category == "software"));
        }
        Screen::Home(_) => unreachable!(),
    }
}

#[test]
fn test_back_returns_home_and_abandons_fetch() {
    let mut state = test_state();
    state.handle_key(key(KeyCode::Enter));
    state.handle_key(key(KeyCode::Esc));

    assert!(matches!(state.screen, Screen::Home(_)));

    // The abandoned result never resurfaces
    std::thread::sleep(Duration::from_millis(400));
    state.poll_fetch();
    assert!(matches!(state.screen, Screen::Home(_)));
}

#[test]
fn test_expand_collapse_round_trip_through_keys() {
    let mut state = test_state();
    state.open_category("electronics");
    wait_until_loaded(&mut state);

    state.handle_key(key(KeyCode::Enter));
    match &state.screen {
        Screen::Category(view) => assert!(view.card(0).unwrap().is_expanded()),
        Screen::Home(_) => unreachable!(),
    }

    state.handle_key(key(KeyCode::Enter));
    match &state.screen {
        Screen::Category(view) => assert!(!view.card(0).unwrap().is_expanded()),
        Screen::Home(_) => unreachable!(),
    }
}

#[test]
fn test_card_state_reset_when_item_set_changes() {
    let mut state = test_state();
    state.open_category("electronics");
    wait_until_loaded(&mut state);

    // Expand the first card, then switch categories
    state.handle_key(key(KeyCode::Enter));
    state.handle_key(key(KeyCode::Esc));
    state.open_category("electronics");
    wait_until_loaded(&mut state);

    // Presentation state does not persist across renders of item sets
    match &state.screen {
        Screen::Category(view) => assert!(!view.card(0).unwrap().is_expanded()),
        Screen::Home(_) => unreachable!(),
    }
}
