use super::*;

#[test]
fn empty_message_waits_for_restore() {
    assert_eq!(empty_message(false, true), "Loading reports...");
    assert_eq!(empty_message(false, false), "Loading reports...");
}

#[test]
fn empty_message_distinguishes_no_reports_from_filtered_out() {
    assert_eq!(empty_message(true, true), "No reports yet. Be the first to report an issue.");
    assert_eq!(empty_message(true, false), "No reports in this category.");
}
