//! Model and key-handling tests for the browser

use super::model::{Model, Tab};
use super::viewer::handle_key_event;
use algodex_catalog::Catalog;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn model() -> Model {
    Model::new(Catalog::load().unwrap(), Tab::Algorithms)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_initial_selection() {
    let model = model();
    assert_eq!(model.tab(), Tab::Algorithms);
    assert_eq!(model.selected(), 0);
    assert!(!model.is_empty());
}

#[test]
fn test_selection_moves_and_clamps() {
    let mut model = model();
    let len = model.len();

    model.select_previous();
    assert_eq!(model.selected(), 0);

    for _ in 0..len + 5 {
        model.select_next();
    }
    assert_eq!(model.selected(), len - 1);
}

#[test]
fn test_tab_switch_keeps_per_tab_selection() {
    let mut model = model();
    model.select_next();
    model.select_next();
    assert_eq!(model.selected(), 2);

    model.toggle_tab();
    assert_eq!(model.tab(), Tab::Patterns);
    assert_eq!(model.selected(), 0);

    model.toggle_tab();
    assert_eq!(model.selected(), 2);
}

#[test]
fn test_current_entry_follows_tab() {
    let mut model = model();
    assert!(model.current_algorithm().is_some());
    assert!(model.current_pattern().is_none());

    model.toggle_tab();
    assert!(model.current_algorithm().is_none());
    let pattern = model.current_pattern().unwrap();
    // Pattern list is presented in collection order
    assert_eq!(pattern.number, 1);
}

#[test]
fn test_selection_resets_detail_scroll() {
    let mut model = model();
    model.scroll_down();
    model.scroll_down();
    assert_eq!(model.detail_scroll(), 2);

    model.select_next();
    assert_eq!(model.detail_scroll(), 0);
}

#[test]
fn test_quit_keys() {
    let mut m = model();
    assert!(handle_key_event(key(KeyCode::Char('q')), &mut m));
    assert!(handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut m
    ));
    assert!(!handle_key_event(key(KeyCode::Char('x')), &mut m));
}

#[test]
fn test_navigation_keys_mutate_model() {
    let mut m = model();
    handle_key_event(key(KeyCode::Down), &mut m);
    assert_eq!(m.selected(), 1);
    handle_key_event(key(KeyCode::Char('k')), &mut m);
    assert_eq!(m.selected(), 0);
    handle_key_event(key(KeyCode::Tab), &mut m);
    assert_eq!(m.tab(), Tab::Patterns);
}
