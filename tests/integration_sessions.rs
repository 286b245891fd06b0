mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{MEMBER_ID, setup_test_app};
use yoga_db::SessionRepository;
use yoga_models::SessionId;

fn session_body(name: &str, teacher_id: i64, users: Vec<i64>) -> Value {
    json!({
        "name": name,
        "date": "2030-06-01T09:00:00Z",
        "teacher_id": teacher_id,
        "description": "Sun salutations and breathing",
        "users": users
    })
}

#[tokio::test]
async fn test_requires_token() {
    let app = setup_test_app().await;

    let (status, body) = app.send("GET", "/api/session", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");

    let (status, _) = app
        .send("GET", "/api/session", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_find_all_sessions() {
    let app = setup_test_app().await;
    let token = app.member_token();

    let (status, body) = app.send("GET", "/api/session", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["name"], "Session de test 1");
    assert_eq!(sessions[1]["name"], "Session de test 2");
    assert_eq!(sessions[1]["description"], "Deuxième session de test");
    assert_eq!(sessions[0]["teacher_id"], 1);
    assert_eq!(sessions[0]["users"], json!([]));
}

#[tokio::test]
async fn test_find_session_by_id() {
    let app = setup_test_app().await;
    let token = app.member_token();

    let (status, body) = app.send("GET", "/api/session/2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert!(body.get("createdAt").is_some());

    let (status, _) = app.send("GET", "/api/session/99", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("GET", "/api/session/abc", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send("GET", "/api/session/%201", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_session() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, body) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(session_body("Morning Flow", 2, vec![MEMBER_ID, 404])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Morning Flow");
    assert_eq!(body["teacher_id"], 2);
    assert_eq!(body["users"], json!([MEMBER_ID]));

    let stored = app
        .store
        .find_session_by_id(SessionId::new(3))
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_create_session_with_plain_date() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, body) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(json!({
                "name": "Morning Flow",
                "date": "2024-01-05",
                "teacher_id": 1,
                "description": "Sun salutations and breathing",
                "users": []
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Morning Flow");
    assert_eq!(body["date"], "2024-01-05T00:00:00Z");
}

#[tokio::test]
async fn test_create_session_with_unknown_teacher() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, body) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(session_body("Guest class", 404, vec![])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teacher_id"], Value::Null);
}

#[tokio::test]
async fn test_create_session_validation() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, _) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(session_body(&"x".repeat(51), 1, vec![])),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(json!({ "name": "No date", "teacher_id": 1, "description": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            "POST",
            "/api/session",
            Some(&token),
            Some(json!({
                "name": "No teacher",
                "date": "2030-06-01T09:00:00Z",
                "teacher_id": null,
                "description": "x"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_session() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, body) = app
        .send(
            "PUT",
            "/api/session/1",
            Some(&token),
            Some(session_body("Renamed session", 2, vec![])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Renamed session");
    assert_eq!(body["teacher_id"], 2);
}

#[tokio::test]
async fn test_update_unknown_session_creates_it() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, body) = app
        .send(
            "PUT",
            "/api/session/42",
            Some(&token),
            Some(session_body("Created by update", 1, vec![])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 42);

    let (status, _) = app.send("GET", "/api/session/42", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_with_bad_id() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, _) = app
        .send(
            "PUT",
            "/api/session/one",
            Some(&token),
            Some(session_body("Whatever", 1, vec![])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_session() {
    let app = setup_test_app().await;
    let token = app.admin_token();

    let (status, _) = app
        .send("DELETE", "/api/session/1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send("GET", "/api/session", Some(&token), None).await;
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["name"], "Session de test 2");

    let (status, _) = app
        .send("DELETE", "/api/session/1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("DELETE", "/api/session/x", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_participate_and_leave() {
    let app = setup_test_app().await;
    let token = app.member_token();
    let uri = format!("/api/session/1/participate/{}", MEMBER_ID);

    let (status, _) = app.send("POST", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send("GET", "/api/session/1", Some(&token), None).await;
    assert_eq!(body["users"], json!([MEMBER_ID]));

    let (status, _) = app.send("POST", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send("GET", "/api/session/1", Some(&token), None).await;
    assert_eq!(body["users"], json!([]));

    let (status, _) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_participate_not_found_and_bad_ids() {
    let app = setup_test_app().await;
    let token = app.member_token();

    let (status, _) = app
        .send("POST", "/api/session/99/participate/2", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("POST", "/api/session/1/participate/99", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("DELETE", "/api/session/99/participate/2", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("POST", "/api/session/1/participate/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
