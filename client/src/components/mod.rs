//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, gallery, and dialogs while reading/writing
//! shared state from Leptos context providers.

pub mod category_filter;
pub mod confirm_dialog;
pub mod report_card;
pub mod report_form;
pub mod report_gallery;
pub mod report_modal;
pub mod stats_bar;
pub mod toast;
