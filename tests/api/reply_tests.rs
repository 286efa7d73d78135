//! Reply API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use forum_api::domain::{Comment, Reply, Thread};

use crate::common::{at, ForumData, TestApp};

const REPLY_URI: &str = "/threads/thread-123/comments/comment-123/replies/reply-123";

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
        replies: vec![Reply {
            id: "reply-123".into(),
            comment_id: "comment-123".into(),
            thread_id: "thread-123".into(),
            username: "johndoe".into(),
            created_at: at(2),
            content: "sebuah balasan".into(),
            is_deleted: false,
        }],
    }
}

#[tokio::test]
async fn test_add_reply_returns_201() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "POST",
            "/threads/thread-123/comments/comment-123/replies",
            Some("dicoding"),
            Some(r#"{"content":"balasan kedua"}"#),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let added = &body["data"]["addedReply"];
    assert!(added["id"].as_str().unwrap().starts_with("reply-"));
    assert_eq!(added["content"], "balasan kedua");
    assert_eq!(added["owner"], "dicoding");
}

#[tokio::test]
async fn test_add_reply_to_missing_comment_returns_404() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "POST",
            "/threads/thread-123/comments/comment-404/replies",
            Some("dicoding"),
            Some(r#"{"content":"isi"}"#),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Comment tidak ditemukan" })
    );
}

#[tokio::test]
async fn test_delete_missing_reply_returns_404() {
    let app = TestApp::new(forum());

    let (status, body) = app
        .send(
            "DELETE",
            "/threads/thread-123/comments/comment-123/replies/reply-404",
            Some("johndoe"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Balasan tidak ditemukan");
}

#[tokio::test]
async fn test_delete_reply_by_non_owner_returns_403() {
    let app = TestApp::new(forum());

    let (status, body) = app.send("DELETE", REPLY_URI, Some("dicoding"), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Anda tidak berhak mengakses resource ini!");
}

#[tokio::test]
async fn test_delete_reply_by_owner_returns_200() {
    let app = TestApp::new(forum());

    let (status, body) = app.send("DELETE", REPLY_URI, Some("johndoe"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));
}
