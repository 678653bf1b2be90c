use super::*;
use reports::{MemoryStorage, ReportDraft, Timestamp};

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp { millis: 1_000, display: "7/4/2025, 3:15:00 PM".to_owned() }
    }
}

fn draft(category: Category) -> ReportDraft {
    ReportDraft {
        name: "Hina".to_owned(),
        contact: "hina@example.com".to_owned(),
        category: Some(category),
        location: "Sindh University Colony".to_owned(),
        description: "Street light out for a week".to_owned(),
        image: None,
    }
}

fn memory_state(raw: Option<&str>) -> ReportsState<MemoryStorage, FixedClock> {
    let storage = raw.map_or_else(MemoryStorage::new, |raw| MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, raw));
    ReportsState::new(ReportStore::unloaded(storage, FixedClock, DEFAULT_STORAGE_KEY))
}

// =============================================================
// Restore lifecycle
// =============================================================

#[test]
fn default_state_is_unrestored_and_empty() {
    let state: ReportsState = ReportsState::default();
    assert!(!state.restored);
    assert!(state.store.is_empty());
    assert_eq!(state.store.storage_key(), DEFAULT_STORAGE_KEY);
}

#[test]
fn restore_reads_persisted_slot() {
    let raw = r#"[{"id":9,"name":"A","contact":"c","category":"Internet","location":"l","description":"d","date":"x","image":null}]"#;
    let mut state = memory_state(Some(raw));
    assert!(state.summaries(None).is_empty());
    state.restore();
    assert!(state.restored);
    assert_eq!(state.summaries(None).len(), 1);
}

#[test]
fn restore_on_browser_storage_outside_hydrate_is_empty() {
    let mut state: ReportsState = ReportsState::default();
    state.restore();
    assert!(state.restored);
    assert!(state.store.is_empty());
}

// =============================================================
// Projections
// =============================================================

#[test]
fn summaries_follow_filter() {
    let mut state = memory_state(None);
    state.store.create(&draft(Category::Electricity)).expect("create");
    state.store.create(&draft(Category::Water)).expect("create");
    assert_eq!(state.summaries(None).len(), 2);
    let water = state.summaries(Some(Category::Water));
    assert_eq!(water.len(), 1);
    assert_eq!(water[0].badge_class, "bg-primary");
    assert_eq!(water[0].date, "7/4/2025");
}

#[test]
fn detail_for_unknown_id_is_none() {
    let state = memory_state(None);
    assert!(state.detail(77).is_none());
}

#[test]
fn detail_and_stats_reflect_store() {
    let mut state = memory_state(None);
    let created = state.store.create(&draft(Category::Gas)).expect("create");
    let detail = state.detail(created.id).expect("detail");
    assert_eq!(detail.contact, "hina@example.com");
    assert_eq!(detail.timestamp, "7/4/2025, 3:15:00 PM");
    let stats = state.stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.top_label(), "Gas");
}

#[test]
fn browser_backed_state_keeps_reports_in_memory_outside_hydrate() {
    let mut state: ReportsState = ReportsState::default();
    state.store.create(&draft(Category::Roads)).expect("create");
    assert_eq!(state.stats().total, 1);
}
