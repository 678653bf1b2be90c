use super::*;
use reports::{DraftError, Field, StorageError};

fn filled() -> FormValues {
    FormValues {
        name: "Sana".to_owned(),
        contact: "0300-1234567".to_owned(),
        category: "Gas".to_owned(),
        location: "Qasimabad".to_owned(),
        description: "Low pressure since Monday".to_owned(),
        image: None,
    }
}

#[test]
fn to_draft_maps_selected_label_to_category() {
    let draft = filled().to_draft();
    assert_eq!(draft.category, Some(Category::Gas));
    assert_eq!(draft.location, "Qasimabad");
}

#[test]
fn to_draft_leaves_placeholder_category_unselected() {
    let values = FormValues { category: String::new(), ..filled() };
    let draft = values.to_draft();
    assert_eq!(draft.category, None);
    assert_eq!(
        draft.validate().err(),
        Some(DraftError::MissingField(Field::Category))
    );
}

#[test]
fn to_draft_carries_photo_payload() {
    let values = FormValues {
        image: Some("data:image/png;base64,AAAA".to_owned()),
        ..filled()
    };
    assert_eq!(values.to_draft().image.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn submit_error_message_names_missing_field() {
    let err = StoreError::InvalidDraft(DraftError::MissingField(Field::Location));
    assert_eq!(submit_error_message(&err), "Location is required");
}

#[test]
fn submit_error_message_hides_storage_details() {
    let err = StoreError::Storage(StorageError::Write("QuotaExceededError".to_owned()));
    let message = submit_error_message(&err);
    assert!(message.starts_with("Could not save the report"));
    assert!(!message.contains("Quota"));
}

#[test]
fn photo_read_is_current_until_superseded() {
    let mut reads = PhotoReads::default();
    let first = reads.begin();
    assert!(reads.is_current(first));

    let second = reads.begin();
    assert!(!reads.is_current(first));
    assert!(reads.is_current(second));
}

#[test]
fn form_reset_discards_pending_photo_read() {
    let mut reads = PhotoReads::default();
    let pending = reads.begin();
    reads.invalidate();
    assert!(!reads.is_current(pending));

    let next = reads.begin();
    assert!(reads.is_current(next));
}
