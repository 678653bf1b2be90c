//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`reports`, `ui`) so the persisted collection
//! stays independent of transient presentation choices like the active
//! filter, open modal, or toast.

pub mod reports;
pub mod ui;
