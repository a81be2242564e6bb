use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn nav_state_default_everything_closed() {
    let state = NavState::default();
    assert_eq!(state.dropdown, Dropdown::Closed);
    assert!(!state.mobile_open);
    assert_eq!(state.appearance, NavAppearance::Default);
}

// =============================================================
// Dropdowns
// =============================================================

#[test]
fn toggle_opens_requested_dropdown() {
    let mut state = NavState::default();
    state.toggle_dropdown(Dropdown::Services);
    assert!(state.is_open(Dropdown::Services));
    assert!(!state.is_open(Dropdown::Account));
}

#[test]
fn toggle_open_dropdown_closes_it() {
    let mut state = NavState::default();
    state.toggle_dropdown(Dropdown::Account);
    state.toggle_dropdown(Dropdown::Account);
    assert_eq!(state.dropdown, Dropdown::Closed);
}

#[test]
fn opening_other_dropdown_replaces_current() {
    let mut state = NavState::default();
    state.toggle_dropdown(Dropdown::Services);
    state.toggle_dropdown(Dropdown::Account);
    assert_eq!(state.dropdown, Dropdown::Account);
    assert!(!state.is_open(Dropdown::Services));
}

#[test]
fn closed_is_never_reported_open() {
    let state = NavState::default();
    assert!(!state.is_open(Dropdown::Closed));
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn mobile_toggle_is_independent_of_dropdown() {
    let mut state = NavState::default();
    state.toggle_dropdown(Dropdown::Services);
    state.toggle_mobile();
    assert!(state.mobile_open);
    assert_eq!(state.dropdown, Dropdown::Services);
    state.toggle_mobile();
    assert!(!state.mobile_open);
    assert_eq!(state.dropdown, Dropdown::Services);
}

#[test]
fn close_all_resets_menus_but_not_appearance() {
    let mut state = NavState::default();
    state.set_scroll_offset(120.0);
    state.toggle_dropdown(Dropdown::Account);
    state.toggle_mobile();
    state.close_all();
    assert_eq!(state.dropdown, Dropdown::Closed);
    assert!(!state.mobile_open);
    assert!(state.is_scrolled());
}

// =============================================================
// Scroll appearance
// =============================================================

#[test]
fn threshold_offset_is_not_scrolled() {
    let mut state = NavState::default();
    state.set_scroll_offset(50.0);
    assert_eq!(state.appearance, NavAppearance::Default);
}

#[test]
fn offset_past_threshold_is_scrolled() {
    let mut state = NavState::default();
    state.set_scroll_offset(51.0);
    assert_eq!(state.appearance, NavAppearance::Scrolled);
}

#[test]
fn scrolling_back_to_top_restores_default() {
    let mut state = NavState::default();
    state.set_scroll_offset(400.0);
    state.set_scroll_offset(0.0);
    assert!(!state.is_scrolled());
}

#[test]
fn appearance_for_offset_matches_threshold() {
    assert_eq!(NavAppearance::for_offset(0.0), NavAppearance::Default);
    assert_eq!(NavAppearance::for_offset(SCROLL_THRESHOLD_PX), NavAppearance::Default);
    assert_eq!(NavAppearance::for_offset(SCROLL_THRESHOLD_PX + 1.0), NavAppearance::Scrolled);
}

#[test]
fn set_scroll_offset_reports_only_real_changes() {
    let mut state = NavState::default();
    assert!(!state.set_scroll_offset(10.0));
    assert!(state.set_scroll_offset(120.0));
    assert!(!state.set_scroll_offset(300.0));
    assert!(!state.set_scroll_offset(51.0));
    assert!(state.set_scroll_offset(50.0));
}
