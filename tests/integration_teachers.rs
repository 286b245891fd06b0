mod common;

use axum::http::StatusCode;

use common::setup_test_app;

#[tokio::test]
async fn test_find_all_teachers() {
    let app = setup_test_app().await;
    let token = app.member_token();

    let (status, body) = app.send("GET", "/api/teacher", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let teachers = body.as_array().unwrap();
    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0]["firstName"], "Margot");
    assert_eq!(teachers[0]["lastName"], "DELAHAYE");
    assert_eq!(teachers[1]["lastName"], "THIERCELIN");
}

#[tokio::test]
async fn test_find_teacher_by_id() {
    let app = setup_test_app().await;
    let token = app.member_token();

    let (status, body) = app.send("GET", "/api/teacher/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert!(body.get("createdAt").is_some());

    let (status, _) = app.send("GET", "/api/teacher/12", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("GET", "/api/teacher/margot", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_teachers_require_token() {
    let app = setup_test_app().await;

    let (status, _) = app.send("GET", "/api/teacher", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
