//! Handler tests for Tasks domain
//!
//! These drive the task router directly and check:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization and `yyyy-MM-dd` dates
//! - HTTP status codes and headers
//! - Error responses

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Days, Local, NaiveDate};
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(TaskService::new(InMemoryTaskRepository::new()))
}

fn in_days(days: u64) -> NaiveDate {
    Local::now().date_naive() + Days::new(days)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, title: &str, status: &str, due_date: NaiveDate) -> Task {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "title": title, "status": status, "dueDate": due_date }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_task_handler_returns_201_with_location() {
    let app = app();
    let due_date = in_days(5);

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "title": "Write report",
                "description": "Quarterly numbers",
                "dueDate": due_date.format("%Y-%m-%d").to_string()
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let body: Value = json_body(response.into_body()).await;

    assert_eq!(location, format!("/tasks/{}", body["id"].as_str().unwrap()));
    assert_eq!(body["title"], "Write report");
    assert_eq!(body["description"], "Quarterly numbers");
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["dueDate"], due_date.format("%Y-%m-%d").to_string());
}

#[tokio::test]
async fn test_create_task_handler_rejects_blank_title() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "title": "  ", "dueDate": in_days(1) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"]["title"].is_array());
}

#[tokio::test]
async fn test_create_task_handler_rejects_missing_title() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({ "dueDate": in_days(1) })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_task_handler_requires_due_date() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({ "title": "No date" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "due date is required");
}

#[tokio::test]
async fn test_create_task_handler_rejects_past_due_date() {
    let yesterday = Local::now().date_naive() - Days::new(1);

    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "title": "Late", "dueDate": yesterday }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "due date must be in the future");
}

#[tokio::test]
async fn test_create_task_handler_rejects_unknown_status() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "title": "Odd", "status": "ARCHIVED", "dueDate": in_days(1) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_task_handler_returns_200() {
    let app = app();
    let created = create(&app, "Fetch me", "IN_PROGRESS", in_days(2)).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task, created);
    assert_eq!(task.status, TaskStatus::InProgress);
}

#[tokio::test]
async fn test_get_task_handler_returns_404_with_id() {
    let response = app()
        .oneshot(empty_request("GET", "/unknown-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("unknown-id"));
}

#[tokio::test]
async fn test_update_task_handler_merges_fields() {
    let app = app();
    let created = create(&app, "Original", "PENDING", in_days(3)).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "status": "DONE" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.id, created.id);
    assert_eq!(task.title, "Original");
    assert_eq!(task.due_date, created.due_date);
    assert_eq!(task.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_update_task_handler_validates_due_date() {
    let app = app();
    let created = create(&app, "Original", "PENDING", in_days(3)).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "dueDate": Local::now().date_naive() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_task_handler_returns_404() {
    let response = app()
        .oneshot(json_request("PUT", "/missing", json!({ "title": "x" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_handler_returns_204_then_404() {
    let app = app();
    let created = create(&app, "Doomed", "PENDING", in_days(1)).await;
    let uri = format!("/{}", created.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_tasks_handler_sorts_filters_and_paginates() {
    let app = app();
    let a = create(&app, "A", "PENDING", in_days(3)).await;
    let b = create(&app, "B", "IN_PROGRESS", in_days(1)).await;
    let c = create(&app, "C", "PENDING", in_days(2)).await;

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Task> = json_body(response.into_body()).await;
    assert_eq!(all, vec![b.clone(), c.clone(), a.clone()]);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?status=PENDING"))
        .await
        .unwrap();
    let pending: Vec<Task> = json_body(response.into_body()).await;
    assert_eq!(pending, vec![c.clone(), a.clone()]);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?page=1&size=2"))
        .await
        .unwrap();
    let second_page: Vec<Task> = json_body(response.into_body()).await;
    assert_eq!(second_page, vec![a]);

    let response = app
        .oneshot(empty_request("GET", "/?page=5&size=2"))
        .await
        .unwrap();
    let past_end: Vec<Task> = json_body(response.into_body()).await;
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_list_tasks_handler_rejects_unknown_status() {
    let response = app()
        .oneshot(empty_request("GET", "/?status=ARCHIVED"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_task_handler_accepts_blank_title() {
    let app = app();
    let created = create(&app, "Original", "PENDING", in_days(3)).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "title": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.title, "");
    assert_eq!(task.status, created.status);
}

#[tokio::test]
async fn test_update_task_handler_rejects_malformed_body() {
    let app = app();
    let created = create(&app, "Original", "PENDING", in_days(3)).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "status": "ARCHIVED" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_task_without_description_renders_null() {
    let app = app();
    let created = create(&app, "Bare", "PENDING", in_days(1)).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    assert!(body.as_object().unwrap().contains_key("description"));
    assert!(body["description"].is_null());
}
