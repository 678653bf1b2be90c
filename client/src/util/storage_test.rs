#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_in_non_hydrate_tests() {
    assert_eq!(BrowserStorage.load("jamshoroReports"), Ok(None));
}

#[test]
fn save_is_accepted_but_not_retained() {
    let mut storage = BrowserStorage;
    assert_eq!(storage.save("jamshoroReports", "[]"), Ok(()));
    assert_eq!(storage.load("jamshoroReports"), Ok(None));
}
