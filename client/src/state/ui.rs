//! Local UI chrome state (filter, detail modal, confirmation, toast).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the report store so the
//! persisted collection only changes through explicit create/delete actions.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use reports::Category;

/// Toast visual variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Sequence number; a dismiss timer only hides the toast it was started for.
    pub seq: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state for the gallery filter, detail modal, and notifications.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Category the gallery is narrowed to; `None` shows all.
    pub filter: Option<Category>,
    /// Report shown in the detail modal.
    pub selected_id: Option<u64>,
    /// Delete confirmation is open for `selected_id`.
    pub confirm_delete: bool,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl UiState {
    /// Open the detail modal for `id`.
    pub fn open_detail(&mut self, id: u64) {
        self.selected_id = Some(id);
        self.confirm_delete = false;
    }

    /// Close the detail modal and any pending confirmation.
    pub fn close_detail(&mut self) {
        self.selected_id = None;
        self.confirm_delete = false;
    }

    /// Ask for delete confirmation; only meaningful while a report is open.
    pub fn request_delete(&mut self) {
        self.confirm_delete = self.selected_id.is_some();
    }

    /// Dismiss the confirmation and stay on the open report.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Replace the current toast. Returns its sequence number.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { seq: self.toast_seq, kind, message: message.into() });
        self.toast_seq
    }

    /// Hide the toast if it is still the one numbered `seq`.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }
}
