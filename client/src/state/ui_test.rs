use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_everything_with_nothing_open() {
    let state = UiState::default();
    assert_eq!(state.filter, None);
    assert_eq!(state.selected_id, None);
    assert!(!state.confirm_delete);
    assert!(state.toast.is_none());
}

#[test]
fn toast_kind_default_is_success() {
    assert_eq!(ToastKind::default(), ToastKind::Success);
    assert_ne!(ToastKind::Success, ToastKind::Error);
}

// =============================================================
// Detail modal
// =============================================================

#[test]
fn open_detail_selects_and_clears_confirmation() {
    let mut state = UiState { confirm_delete: true, ..UiState::default() };
    state.open_detail(12);
    assert_eq!(state.selected_id, Some(12));
    assert!(!state.confirm_delete);
}

#[test]
fn close_detail_resets_selection() {
    let mut state = UiState::default();
    state.open_detail(3);
    state.confirm_delete = true;
    state.close_detail();
    assert_eq!(state.selected_id, None);
    assert!(!state.confirm_delete);
}

#[test]
fn cancel_delete_keeps_report_open() {
    let mut state = UiState::default();
    state.open_detail(8);
    state.request_delete();
    assert!(state.confirm_delete);
    state.cancel_delete();
    assert!(!state.confirm_delete);
    assert_eq!(state.selected_id, Some(8));
}

#[test]
fn request_delete_without_open_report_is_ignored() {
    let mut state = UiState::default();
    state.request_delete();
    assert!(!state.confirm_delete);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn show_toast_numbers_each_toast() {
    let mut state = UiState::default();
    let first = state.show_toast(ToastKind::Success, "Report submitted successfully!");
    let second = state.show_toast(ToastKind::Error, "Could not save");
    assert!(second > first);
    let toast = state.toast.expect("toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Could not save");
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = UiState::default();
    let first = state.show_toast(ToastKind::Success, "one");
    let second = state.show_toast(ToastKind::Success, "two");
    state.dismiss_toast(first);
    assert_eq!(state.toast.as_ref().map(|t| t.seq), Some(second));
    state.dismiss_toast(second);
    assert!(state.toast.is_none());
}
