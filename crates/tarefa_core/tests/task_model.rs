use tarefa_core::{normalize_title, Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello");

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "hello");
    assert!(!task.done);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn with_id_rejects_blank_title() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let err = Task::with_id(id, "   ").unwrap_err();
    assert_eq!(err, TaskValidationError::BlankTitle);
}

#[test]
fn normalize_title_trims_and_rejects_blank_input() {
    assert_eq!(normalize_title("  Buy milk  ").as_deref(), Some("Buy milk"));
    assert_eq!(normalize_title("ship it").as_deref(), Some("ship it"));
    assert_eq!(normalize_title(""), None);
    assert_eq!(normalize_title("   "), None);
    assert_eq!(normalize_title("\t\n"), None);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "wash dishes").unwrap();
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "wash dishes");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
