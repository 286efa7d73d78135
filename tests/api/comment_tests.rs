//! Comment API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use forum_api::domain::{Comment, Thread};

use crate::common::{at, ForumData, TestApp};

fn forum() -> ForumData {
    ForumData {
        threads: vec![Thread {
            id: "thread-123".into(),
            title: "sebuah title".into(),
            body: "sebuah body".into(),
            username: "dicoding".into(),
            created_at: at(0),
        }],
        comments: vec![Comment {
            id: "comment-123".into(),
            thread_id: "thread-123".into(),
            username: "dicoding".into(),
            created_at: at(1),
            content: "sebuah comment".into(),
            is_deleted: false,
        }],
        replies: vec![],
    }
}

#[tokio::test]
async fn test_add_comment_returns_201() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "POST",
            "/threads/thread-123/comments",
            Some("johndoe"),
            Some(r#"{"content":"berisi sebuah comment"}"#),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let added = &body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "berisi sebuah comment");
    assert_eq!(added["owner"], "johndoe");
}

#[tokio::test]
async fn test_add_comment_to_missing_thread_returns_404() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "POST",
            "/threads/thread-404/comments",
            Some("johndoe"),
            Some(r#"{"content":"isi"}"#),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Thread tidak ditemukan" })
    );
}

#[tokio::test]
async fn test_add_comment_with_non_string_content_returns_400() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "POST",
            "/threads/thread-123/comments",
            Some("johndoe"),
            Some(r#"{"content":true}"#),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "comment harus berupa string" })
    );
}

#[tokio::test]
async fn test_delete_comment_without_owner_returns_401() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send("DELETE", "/threads/thread-123/comments/comment-123", None, None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authentication");
}

#[tokio::test]
async fn test_delete_missing_comment_returns_404() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send("DELETE", "/threads/thread-123/comments/comment-404", Some("dicoding"), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Comment tidak ditemukan");
}

#[tokio::test]
async fn test_delete_comment_by_non_owner_returns_403() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send("DELETE", "/threads/thread-123/comments/comment-123", Some("johndoe"), None)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Anda tidak berhak mengakses resource ini!" })
    );

    let (_, thread) = app.get_json("/threads/thread-123").await;
    assert_eq!(thread["data"]["thread"]["comments"][0]["content"], "sebuah comment");
}

#[tokio::test]
async fn test_delete_comment_by_owner_masks_it() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send("DELETE", "/threads/thread-123/comments/comment-123", Some("dicoding"), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (_, thread) = app.get_json("/threads/thread-123").await;
    assert_eq!(
        thread["data"]["thread"]["comments"][0]["content"],
        forum_api::domain::DELETED_CONTENT_PLACEHOLDER
    );
}
