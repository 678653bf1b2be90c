//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, `Date`,
//! `FileReader`) from page and component logic so they no-op cleanly during
//! server rendering and in tests.

pub mod browser_clock;
pub mod file_reader;
pub mod storage;
