use crate::Avatar;

use uuid::Uuid;

#[test]
fn given_picked_image_then_file_name_embeds_owner_and_time() {
    let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    let avatar = Avatar::picked(id, "file:///tmp/a.jpg", 1704067200000);

    assert_eq!(avatar.uri, "file:///tmp/a.jpg");
    assert_eq!(avatar.mime_type, "image/jpeg");
    assert_eq!(
        avatar.file_name,
        "avatar-550e8400-e29b-41d4-a716-446655440000-1704067200000.jpg"
    );
}

#[test]
fn given_avatar_when_serialize_then_uses_stored_field_names() {
    let avatar = Avatar::picked(Uuid::new_v4(), "file:///a.png", 1).with_mime_type("image/png");
    let value = serde_json::to_value(&avatar).unwrap();

    assert_eq!(value["uri"], "file:///a.png");
    assert_eq!(value["type"], "image/png");
    assert!(value["name"].as_str().unwrap().starts_with("avatar-"));
}
