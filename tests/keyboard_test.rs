use chrono::{NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dategrid::calendar::{Bounds, CalendarState, KeyboardNavigationController, Transition};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn setup() -> (KeyboardNavigationController, CalendarState) {
    (
        KeyboardNavigationController::new(Weekday::Sun),
        CalendarState::new(d(1995, 6, 18), Bounds::default()),
    )
}

#[test]
fn test_arrow_up_moves_back_one_week() {
    let (mut keyboard, mut state) = setup();
    let transition = keyboard.handle_key(key(KeyCode::Up), &mut state, &|_| false);
    assert_eq!(transition, Transition::Moved);
    assert_eq!(state.active_date(), d(1995, 6, 11));
    // pure navigation never touches the selection
    assert_eq!(state.selected_date(), d(1995, 6, 18));
}

#[test]
fn test_arrow_keys_use_day_arithmetic() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Down), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 6, 25));
    keyboard.handle_key(key(KeyCode::Left), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 6, 24));
    keyboard.handle_key(key(KeyCode::Right), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 6, 25));
}

#[test]
fn test_arrow_up_crosses_the_rendered_window() {
    let (mut keyboard, mut state) = setup();
    state.apply(dategrid::calendar::CalendarAction::SetActive(d(1995, 6, 1)));
    keyboard.handle_key(key(KeyCode::Up), &mut state, &|_| false);
    // resolves to a real day even though it was not in June's window,
    // and the active month follows it
    assert_eq!(state.active_date(), d(1995, 5, 25));
    assert_eq!(state.active_month(), d(1995, 5, 1));
}

#[test]
fn test_navigation_records_pending_focus() {
    let (mut keyboard, mut state) = setup();
    assert_eq!(keyboard.pending_focus(), None);

    keyboard.handle_key(key(KeyCode::Up), &mut state, &|_| false);
    assert_eq!(keyboard.pending_focus(), Some(d(1995, 6, 11)));
    assert!(state.keyboard_interaction());

    assert_eq!(keyboard.take_pending_focus(), Some(d(1995, 6, 11)));
    assert_eq!(keyboard.take_pending_focus(), None);
}

#[test]
fn test_navigation_outside_bounds_is_absorbed() {
    let mut keyboard = KeyboardNavigationController::new(Weekday::Sun);
    let bounds = Bounds::new(Some(d(1995, 6, 11)), None);
    let mut state = CalendarState::new(d(1995, 6, 15), bounds);

    // arrows are constrained by bounds inside the reducer, not the predicate
    let transition = keyboard.handle_key(key(KeyCode::Up), &mut state, &|_| false);
    assert_eq!(transition, Transition::Ignored);
    assert_eq!(state.active_date(), d(1995, 6, 15));
    assert_eq!(keyboard.pending_focus(), None);
}

#[test]
fn test_home_targets_first_selectable_day_of_month() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Home), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 6, 1));
}

#[test]
fn test_home_skips_disabled_days() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Home), &mut state, &|day| day < d(1995, 6, 5));
    assert_eq!(state.active_date(), d(1995, 6, 5));
}

#[test]
fn test_end_targets_last_selectable_day_of_month() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::End), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 6, 30));

    keyboard.handle_key(key(KeyCode::End), &mut state, &|day| day > d(1995, 6, 28));
    assert_eq!(state.active_date(), d(1995, 6, 28));
}

#[test]
fn test_home_end_with_modifier_target_grid_corners() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(ctrl(KeyCode::Home), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 5, 28));

    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(ctrl(KeyCode::End), &mut state, &|_| false);
    assert_eq!(state.active_date(), d(1995, 7, 8));
}

#[test]
fn test_home_with_every_day_disabled_is_noop() {
    let (mut keyboard, mut state) = setup();
    let transition = keyboard.handle_key(key(KeyCode::Home), &mut state, &|_| true);
    assert_eq!(transition, Transition::Ignored);
    assert_eq!(state.active_date(), d(1995, 6, 18));
}

#[test]
fn test_enter_commits_the_active_day() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Up), &mut state, &|_| false);
    let transition = keyboard.handle_key(key(KeyCode::Enter), &mut state, &|_| false);
    assert_eq!(transition, Transition::Committed(d(1995, 6, 11)));
    assert_eq!(state.selected_date(), d(1995, 6, 11));
    assert_eq!(keyboard.pending_focus(), Some(d(1995, 6, 11)));
}

#[test]
fn test_space_commits_like_enter() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Right), &mut state, &|_| false);
    let transition = keyboard.handle_key(key(KeyCode::Char(' ')), &mut state, &|_| false);
    assert_eq!(transition, Transition::Committed(d(1995, 6, 19)));
}

#[test]
fn test_enter_on_disabled_day_is_noop() {
    let (mut keyboard, mut state) = setup();
    keyboard.handle_key(key(KeyCode::Right), &mut state, &|_| false);
    let transition = keyboard.handle_key(key(KeyCode::Enter), &mut state, &|_| true);
    assert_eq!(transition, Transition::Ignored);
    assert_eq!(state.selected_date(), d(1995, 6, 18));
}

#[test]
fn test_unhandled_keys_are_ignored() {
    let (mut keyboard, mut state) = setup();
    let transition = keyboard.handle_key(key(KeyCode::Char('x')), &mut state, &|_| false);
    assert_eq!(transition, Transition::Ignored);
    assert_eq!(keyboard.pending_focus(), None);
}
