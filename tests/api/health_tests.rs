//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{ForumData, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new(ForumData::default());

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = TestApp::new(ForumData::default());

    let (status, body) = app.get_json("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new(ForumData::default());

    let (status, body) = app.get_json("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["status"], "unhealthy");
}
