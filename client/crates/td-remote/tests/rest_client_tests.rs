//! Integration tests for the REST client using a wiremock server

use td_config::RemoteConfig;
use td_core::{Avatar, Identity, ProfileForm, ProfileLinks};
use td_remote::{NewIdentity, ProfileUpdate, RemoteDataService, RestClient, SESSION_FILENAME};

use std::time::Duration;

use chrono::Utc;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, len};
use serde_json::json;
use uuid::Uuid;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path, query_param},
};

const USER_ID: &str = "00000000-0000-0000-0000-000000000001";

fn client(server: &MockServer) -> RestClient {
    RestClient::new(&server.uri(), "anon-key", Duration::from_secs(5)).unwrap()
}

fn user_id() -> Uuid {
    Uuid::parse_str(USER_ID).unwrap()
}

#[tokio::test]
async fn test_insert_identity_posts_row_with_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer anon-key"))
        .and(body_partial_json(json!({
            "username": "alice",
            "email": "a@b.com",
            "password_hash": "$argon2id$stub"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .insert_identity(&NewIdentity {
            username: "alice".into(),
            email: "a@b.com".into(),
            password_hash: "$argon2id$stub".into(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_insert_identity_conflict_surfaces_service_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .insert_identity(&NewIdentity {
            username: "alice".into(),
            email: "a@b.com".into(),
            password_hash: "$argon2id$stub".into(),
        })
        .await
        .unwrap_err();

    assert_that!(
        err.service_message(),
        eq("duplicate key value violates unique constraint")
    );
    assert_that!(err.to_string(), contains_substring("23505"));
}

#[tokio::test]
async fn test_find_identities_filters_by_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("username", "eq.alice"))
        .and(query_param("select", "id,username,email,password_hash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": USER_ID,
                "username": "alice",
                "email": "a@b.com",
                "password_hash": "$argon2id$stub"
            }
        ])))
        .mount(&mock_server)
        .await;

    let records = client(&mock_server).find_identities("alice").await.unwrap();

    assert_that!(records, len(eq(1)));
    assert_that!(records[0].id, eq(user_id()));
    assert_that!(records[0].password_hash, eq("$argon2id$stub"));
}

#[tokio::test]
async fn test_update_identity_patches_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{USER_ID}")))
        .and(body_partial_json(json!({
            "username": "alice",
            "bio": "Rustacean",
            "links": { "website": "https://alice.dev" }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut links = ProfileLinks::new();
    links.insert("website", "https://alice.dev");
    let form = ProfileForm {
        username: " alice ".into(),
        bio: "Rustacean".into(),
        avatar: Some(Avatar::picked(user_id(), "file:///a.jpg", 0)),
        links: Some(links),
    };

    let result = client(&mock_server)
        .update_identity(user_id(), &ProfileUpdate::from_form(&form, Utc::now()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_profile_missing_row_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let profile = client(&mock_server).get_profile(user_id()).await.unwrap();

    assert!(profile.is_none());
}

#[tokio::test]
async fn test_list_tasks_uses_or_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/tasks"))
        .and(query_param(
            "or",
            format!("(created_by.eq.{USER_ID},assigned_to.eq.{USER_ID})"),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "00000000-0000-0000-0000-0000000000a1",
                "name": "Write docs",
                "status": "todo",
                "deadline": "2024-01-01T00:00:00Z",
                "created_by": "00000000-0000-0000-0000-000000000002",
                "assigned_to": USER_ID
            }
        ])))
        .mount(&mock_server)
        .await;

    let tasks = client(&mock_server).list_tasks(user_id()).await.unwrap();

    assert_that!(tasks, len(eq(1)));
    assert_that!(tasks[0].assigned_to, eq(Some(user_id())));
}

#[tokio::test]
async fn test_list_notifications_requests_unread_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/notifications"))
        .and(query_param("user_id", format!("eq.{USER_ID}")))
        .and(query_param("is_read", "eq.false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "00000000-0000-0000-0000-0000000000b1",
                "user_id": USER_ID,
                "message": "You were assigned a task",
                "is_read": false
            }
        ])))
        .mount(&mock_server)
        .await;

    let notifications = client(&mock_server)
        .list_notifications(user_id())
        .await
        .unwrap();

    assert_that!(notifications, len(eq(1)));
    assert_that!(notifications[0].message, eq("You were assigned a task"));
}

#[tokio::test]
async fn test_list_projects_server_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .list_projects(user_id())
        .await
        .unwrap_err();

    assert!(err.is_transient());
    assert_that!(err.service_message(), eq("upstream exploded"));
}

#[tokio::test]
async fn test_session_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": USER_ID, "username": "alice", "bio": "Rustacean" }
        ])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert!(client.get_current_session().await.unwrap().is_none());

    client
        .open_session(&Identity::new(user_id(), "alice".into(), None))
        .await
        .unwrap();
    let restored = client.get_current_session().await.unwrap().unwrap();
    assert_that!(restored.bio.as_deref(), eq(Some("Rustacean")));

    client.sign_out_session().await.unwrap();
    assert!(client.get_current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_dropped_when_identity_row_disappears() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .open_session(&Identity::new(user_id(), "alice".into(), None))
        .await
        .unwrap();

    assert!(client.get_current_session().await.unwrap().is_none());
    assert!(client.session_identity_id().is_none());
}

async fn mount_alice_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": USER_ID, "username": "alice", "bio": "Rustacean" }
        ])))
        .mount(server)
        .await;
}

fn remote_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        url: server.uri(),
        api_key: Some("anon-key".into()),
        ..RemoteConfig::default()
    }
}

#[tokio::test]
async fn test_session_survives_a_new_client_instance() {
    let mock_server = MockServer::start().await;
    mount_alice_profile(&mock_server).await;
    let config_dir = TempDir::new().unwrap();

    let first = RestClient::from_config(&remote_config(&mock_server), config_dir.path()).unwrap();
    first
        .open_session(&Identity::new(user_id(), "alice".into(), None))
        .await
        .unwrap();
    assert!(config_dir.path().join(SESSION_FILENAME).exists());

    let second = RestClient::from_config(&remote_config(&mock_server), config_dir.path()).unwrap();
    assert_that!(second.session_identity_id(), eq(Some(user_id())));

    let restored = second.get_current_session().await.unwrap().unwrap();
    assert_that!(restored.username.as_str(), eq("alice"));
}

#[tokio::test]
async fn test_sign_out_removes_stored_session() {
    let mock_server = MockServer::start().await;
    mount_alice_profile(&mock_server).await;
    let config_dir = TempDir::new().unwrap();

    let first = RestClient::from_config(&remote_config(&mock_server), config_dir.path()).unwrap();
    first
        .open_session(&Identity::new(user_id(), "alice".into(), None))
        .await
        .unwrap();
    first.sign_out_session().await.unwrap();
    assert!(!config_dir.path().join(SESSION_FILENAME).exists());

    let second = RestClient::from_config(&remote_config(&mock_server), config_dir.path()).unwrap();
    assert!(second.get_current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_corrupt_session_file_starts_signed_out() {
    let mock_server = MockServer::start().await;
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join(SESSION_FILENAME), "not json").unwrap();

    let client = RestClient::from_config(&remote_config(&mock_server), config_dir.path()).unwrap();

    assert!(client.session_identity_id().is_none());
    assert!(client.get_current_session().await.unwrap().is_none());
}
