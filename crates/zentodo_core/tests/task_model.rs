use chrono::{TimeZone, Utc};
use uuid::Uuid;
use zentodo_core::{Task, TaskValidationError};

#[test]
fn new_task_sets_defaults() {
    let task = Task::new("Buy milk").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn new_task_trims_text() {
    let task = Task::new("  water the plants  ").unwrap();
    assert_eq!(task.text, "water the plants");
}

#[test]
fn empty_and_whitespace_text_are_rejected() {
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(Task::new("   ").unwrap_err(), TaskValidationError::EmptyText);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "orphan", false, Utc::now()).unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn toggle_flips_only_the_completion_flag() {
    let mut task = Task::new("write report").unwrap();
    let id = task.id;
    let created_at = task.created_at;

    task.toggle();
    assert!(task.completed);
    assert_eq!(task.id, id);
    assert_eq!(task.text, "write report");
    assert_eq!(task.created_at, created_at);

    task.toggle();
    assert!(!task.completed);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let task = Task::with_id(id, "ship the release", true, created_at).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "ship the release");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], "2026-03-01T09:30:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn malformed_timestamp_fails_to_decode() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "left over",
        "completed": false,
        "createdAt": "not-a-timestamp"
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
