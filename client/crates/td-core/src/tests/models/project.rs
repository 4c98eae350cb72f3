use crate::Project;

use uuid::Uuid;

fn project(description: Option<&str>) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: "Website".into(),
        description: description.map(String::from),
        created_by: Uuid::new_v4(),
    }
}

#[test]
fn given_description_then_shown_as_is() {
    assert_eq!(project(Some("Landing page")).description_or_default(), "Landing page");
}

#[test]
fn given_missing_or_empty_description_then_fallback_text() {
    assert_eq!(project(None).description_or_default(), "No description provided");
    assert_eq!(project(Some("")).description_or_default(), "No description provided");
}
