use crate::{Identity, ProfileLinks};

use uuid::Uuid;

#[test]
fn given_new_identity_then_profile_fields_are_empty() {
    let identity = Identity::new(Uuid::new_v4(), "alice".into(), Some("a@b.com".into()));

    assert_eq!(identity.username, "alice");
    assert!(identity.bio.is_none());
    assert!(identity.avatar.is_none());
    assert!(identity.links.is_none());
}

#[test]
fn given_email_when_display_name_then_uses_email() {
    let identity = Identity::new(Uuid::new_v4(), "alice".into(), Some("a@b.com".into()));
    assert_eq!(identity.display_name(), "a@b.com");
}

#[test]
fn given_no_email_when_display_name_then_falls_back_to_username() {
    let identity = Identity::new(Uuid::new_v4(), "alice".into(), None);
    assert_eq!(identity.display_name(), "alice");
}

#[test]
fn given_row_without_profile_columns_when_deserialize_then_defaults_to_none() {
    let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","username":"alice"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert!(identity.email.is_none());
    assert!(identity.bio.is_none());
    assert!(identity.avatar.is_none());
    assert!(identity.links.is_none());
}

#[test]
fn given_links_object_when_deserialize_then_maps_providers() {
    let json = r#"{
        "id":"550e8400-e29b-41d4-a716-446655440000",
        "username":"alice",
        "links":{"twitter":"https://twitter.com/alice","website":""}
    }"#;
    let identity: Identity = serde_json::from_str(json).unwrap();
    let links = identity.links.unwrap();

    assert_eq!(links.get("twitter"), Some("https://twitter.com/alice"));
    assert_eq!(links.get("website"), Some(""));
    assert_eq!(links.get("instagram"), None);
}

#[test]
fn given_known_providers_then_all_present_and_empty() {
    let links = ProfileLinks::with_known_providers();

    assert_eq!(links.len(), 3);
    assert!(links.iter().all(|(_, url)| url.is_empty()));
}
