use crate::Task;

use uuid::Uuid;

#[test]
fn given_creator_or_assignee_then_task_involves_user() {
    let creator = Uuid::new_v4();
    let assignee = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let task = Task {
        id: Uuid::new_v4(),
        name: "Write docs".into(),
        status: "todo".into(),
        deadline: None,
        created_by: creator,
        assigned_to: Some(assignee),
    };

    assert!(task.involves(creator));
    assert!(task.involves(assignee));
    assert!(!task.involves(stranger));
}

#[test]
fn given_row_with_deadline_when_deserialize_then_parses_timestamp() {
    let json = r#"{
        "id":"550e8400-e29b-41d4-a716-446655440001",
        "name":"Ship",
        "status":"in_progress",
        "deadline":"2024-01-01T00:00:00Z",
        "created_by":"550e8400-e29b-41d4-a716-446655440000",
        "assigned_to":null
    }"#;
    let task: Task = serde_json::from_str(json).unwrap();

    assert_eq!(task.deadline.unwrap().timestamp(), 1704067200);
    assert!(task.assigned_to.is_none());
}
