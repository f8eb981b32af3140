//! HTTP API tests against an in-memory database

use assignment_server::api::build_app;
use assignment_server::db::DbService;
use assignment_server::{Config, ServerState};
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let state = ServerState::for_tests().await.unwrap();
    build_app(&state).with_state(state)
}

/// App over a file-backed pool so requests run on separate connections
async fn file_app(dir: &tempfile::TempDir) -> Router {
    let path = dir.path().join("assignments.db");
    let db = DbService::new(&format!("sqlite:{}", path.display()), 8)
        .await
        .unwrap();
    let state = ServerState::with_db(Config::for_tests(), db);
    build_app(&state).with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    send_raw(app, method, uri, body).await
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

struct Seed {
    organization: i64,
    employee: i64,
    assignment: i64,
}

/// Organization "Test Corp" with one employee and assignment "Test Assignment"
async fn seed(app: &Router) -> Seed {
    let (status, org) = send(
        app,
        Method::POST,
        "/organizations/",
        Some(json!({"name": "Test Corp", "description": "QA", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, user) = send(
        app,
        Method::POST,
        "/users/",
        Some(json!({"username": "testuser", "first_name": "Test", "last_name": "User"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, employee) = send(
        app,
        Method::POST,
        "/employees/",
        Some(json!({
            "user_id": user["id"],
            "organization_id": org["id"],
            "employee_type": "full_time",
            "department": "Engineering",
            "position": "Developer",
            "joining_date": "2024-01-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, assignment) = send(
        app,
        Method::POST,
        "/assignments/",
        Some(json!({
            "title": "Test Assignment",
            "description": "Write tests",
            "organization_id": org["id"],
            "deadline": "2024-12-31T23:59:59Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["status"], "pending");

    Seed {
        organization: org["id"].as_i64().unwrap(),
        employee: employee["id"].as_i64().unwrap(),
        assignment: assignment["id"].as_i64().unwrap(),
    }
}

fn assign_body(seed: &Seed) -> Value {
    json!({
        "employee_id": seed.employee,
        "assignment_id": seed.assignment,
        "start_time": "2024-01-01T09:00:00Z"
    })
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_assign_then_duplicate() {
    let app = app().await;
    let seed = seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employee-assignments/create/",
        Some(assign_body(&seed)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee"], seed.employee);
    assert_eq!(body["assignment"], seed.assignment);
    assert_eq!(body["duration"], Value::Null);
    assert_eq!(body["evaluation_comments"], "");
    assert_eq!(body["is_completed"], false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee is already assigned to this assignment");
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn test_update_score_range() {
    let app = app().await;
    let seed = seed(&app).await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;
    let uri = format!("/employee-assignments/{}/update/", created["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"evaluation_score": 6.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Evaluation score must be between 0 and 5");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"evaluation_score": 4.5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation_score"], 4.5);

    let (_, stored) = send(
        &app,
        Method::GET,
        &format!("/employee-assignments/{}/", created["id"]),
        None,
    )
    .await;
    assert_eq!(stored["evaluation_score"], 4.5);
}

#[tokio::test]
async fn test_partial_update_keeps_score() {
    let app = app().await;
    let seed = seed(&app).await;
    let mut body = assign_body(&seed);
    body["evaluation_score"] = json!(3.5);
    let (_, created) = send(&app, Method::POST, "/employee-assignments/", Some(body)).await;

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/employee-assignments/{}/", created["id"]),
        Some(json!({"is_completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_completed"], true);
    assert_eq!(updated["evaluation_score"], 3.5);
}

#[tokio::test]
async fn test_duration_follows_timestamps() {
    let app = app().await;
    let seed = seed(&app).await;
    let mut body = assign_body(&seed);
    body["end_time"] = json!("2024-01-02T10:30:00.25Z");
    let (status, created) = send(&app, Method::POST, "/employee-assignments/", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["duration"], "1 01:30:00.250000");

    let (_, updated) = send(
        &app,
        Method::PUT,
        &format!("/employee-assignments/{}/", created["id"]),
        Some(json!({"end_time": null})),
    )
    .await;
    assert_eq!(updated["end_time"], Value::Null);
    assert_eq!(updated["duration"], Value::Null);
}

#[tokio::test]
async fn test_create_rejections() {
    let app = app().await;
    let seed = seed(&app).await;

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/employee-assignments/",
        Body::from("{not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON format");

    let (status, body) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(json!({"employee_id": seed.employee, "assignment_id": seed.assignment})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: start_time");

    let mut bad_date = assign_body(&seed);
    bad_date["start_time"] = json!("31/01/2024");
    let (status, body) = send(&app, Method::POST, "/employee-assignments/", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format");

    let mut blank_end = assign_body(&seed);
    blank_end["end_time"] = json!("");
    let (status, body) = send(&app, Method::POST, "/employee-assignments/", Some(blank_end)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format");
    assert_eq!(body["details"]["field"], "end_time");

    let mut missing_ref = assign_body(&seed);
    missing_ref["employee_id"] = json!(999);
    let (status, body) = send(&app, Method::POST, "/employee-assignments/", Some(missing_ref)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Employee or Assignment not found");

    let (_, list) = send(&app, Method::GET, "/employee-assignments/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_evaluate_and_complete() {
    let app = app().await;
    let seed = seed(&app).await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/employee-assignments/{id}/evaluate/"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Evaluation score is required");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/employee-assignments/{id}/evaluate/"),
        Some(json!({"evaluation_score": "excellent"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Evaluation score must be a number between 0 and 5");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/employee-assignments/{id}/evaluate/"),
        Some(json!({"evaluation_score": 5, "evaluation_comments": "Great work"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation_score"], 5.0);
    assert_eq!(body["evaluation_comments"], "Great work");

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/employee-assignments/{id}/complete/"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_completed"], true);
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/employee-assignments/999/complete/",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_organization() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/organizations/999/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);

    let (status, _) = send(&app, Method::GET, "/organizations/abc/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_views_embed_related_records() {
    let app = app().await;
    let seed = seed(&app).await;
    send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;

    let (status, org) = send(
        &app,
        Method::GET,
        &format!("/organizations/{}/", seed.organization),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(org["name"], "Test Corp");
    assert_eq!(org["employees"].as_array().unwrap().len(), 1);
    assert_eq!(org["assignments"][0]["title"], "Test Assignment");

    let (_, employee) = send(&app, Method::GET, &format!("/employees/{}/", seed.employee), None).await;
    assert_eq!(employee["user"]["username"], "testuser");
    assert_eq!(employee["organization"]["id"], seed.organization);
    assert_eq!(employee["assignments"][0]["assignment"], seed.assignment);

    let (_, assignment) = send(
        &app,
        Method::GET,
        &format!("/assignments/{}/", seed.assignment),
        None,
    )
    .await;
    assert_eq!(assignment["organization"]["name"], "Test Corp");
    assert_eq!(assignment["assigned_employees"][0]["employee"], seed.employee);
}

#[tokio::test]
async fn test_list_filters() {
    let app = app().await;
    let seed = seed(&app).await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;

    let (_, open) = send(
        &app,
        Method::GET,
        &format!("/employees/{}/assignments/?is_completed=false", seed.employee),
        None,
    )
    .await;
    assert_eq!(open.as_array().unwrap().len(), 1);

    send(
        &app,
        Method::POST,
        &format!("/employee-assignments/{}/complete/", created["id"]),
        None,
    )
    .await;

    let (_, done) = send(
        &app,
        Method::GET,
        &format!(
            "/assignments/{}/assigned_employees/?is_completed=True",
            seed.assignment
        ),
        None,
    )
    .await;
    assert_eq!(done.as_array().unwrap().len(), 1);

    let (_, open) = send(
        &app,
        Method::GET,
        &format!("/employee-assignments/?employee={}&is_completed=no", seed.employee),
        None,
    )
    .await;
    assert_eq!(open, json!([]));

    let (status, _) = send(&app, Method::GET, "/assignments/?status=archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, pending) = send(&app, Method::GET, "/assignments/?status=pending", None).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (_, other_org) = send(&app, Method::GET, "/employees/?organization=999", None).await;
    assert_eq!(other_org, json!([]));
}

#[tokio::test]
async fn test_one_employee_per_user() {
    let app = app().await;
    let seed = seed(&app).await;
    let (_, users) = send(&app, Method::GET, "/users/", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees/",
        Some(json!({
            "user_id": users[0]["id"],
            "organization_id": seed.organization,
            "employee_type": "intern",
            "department": "Sales",
            "position": "Rep",
            "joining_date": "2024-02-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2003);

    let (status, _) = send(
        &app,
        Method::POST,
        "/employees/",
        Some(json!({
            "user_id": users[0]["id"],
            "organization_id": seed.organization,
            "employee_type": "contractor",
            "department": "Sales",
            "position": "Rep",
            "joining_date": "2024-02-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_organization_cascades() {
    let app = app().await;
    let seed = seed(&app).await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/organizations/{}/", seed.organization),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &format!("/employees/{}/", seed.employee), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/employee-assignments/{}/", created["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let router = app().await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_assignment_deadline_forms() {
    let app = app().await;
    let seed = seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/assignments/",
        Some(json!({
            "title": "Naive deadline",
            "organization_id": seed.organization,
            "deadline": "2024-06-01T12:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["deadline"], "2024-06-01T12:00:00Z");

    let (status, body) = send(
        &app,
        Method::POST,
        "/assignments/",
        Some(json!({
            "title": "Bad deadline",
            "organization_id": seed.organization,
            "deadline": "01/06/2024"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/assignments/{}/", seed.assignment),
        Some(json!({"deadline": "soon"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format");
}

#[tokio::test]
async fn test_create_accepts_string_ids() {
    let app = app().await;
    let seed = seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(json!({
            "employee_id": seed.employee.to_string(),
            "assignment_id": seed.assignment.to_string(),
            "start_time": "2024-01-01T09:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee"], seed.employee);
    assert_eq!(body["assignment"], seed.assignment);

    let (status, _) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(json!({
            "employee_id": "first",
            "assignment_id": seed.assignment,
            "start_time": "2024-01-01T09:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_assign_creates_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir).await;
    let seed = seed(&app).await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = app.clone();
        let body = assign_body(&seed);
        handles.push(tokio::spawn(async move {
            send(&app, Method::POST, "/employee-assignments/", Some(body)).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(body["error"], "Employee is already assigned to this assignment");
        }
    }
    assert_eq!(created, 1);

    let (_, list) = send(&app, Method::GET, "/employee-assignments/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_keep_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir).await;
    let seed = seed(&app).await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/employee-assignments/",
        Some(assign_body(&seed)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/employee-assignments/{id}/");
    let complete_uri = format!("/employee-assignments/{id}/complete/");

    let writes = [
        (Method::PATCH, uri.clone(), Some(json!({"evaluation_comments": "Reviewed"}))),
        (Method::PATCH, uri.clone(), Some(json!({"end_time": "2024-01-01T17:00:00Z"}))),
        (Method::PATCH, uri.clone(), Some(json!({"evaluation_score": 4}))),
        (Method::POST, complete_uri, None),
    ];

    let mut handles = Vec::new();
    for _ in 0..5 {
        for (method, uri, body) in writes.iter().cloned() {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                send(&app, method, &uri, body).await
            }));
        }
    }
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    let (status, record) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["is_completed"], true);
    assert_eq!(record["evaluation_comments"], "Reviewed");
    assert_eq!(record["evaluation_score"], 4.0);
    assert_eq!(record["end_time"], "2024-01-01T17:00:00Z");
    assert_eq!(record["duration"], "08:00:00");
}
