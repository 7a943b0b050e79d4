use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_maintenance::config::EnvironmentConfig;
use fleet_maintenance::{create_router, AppState};

fn create_test_app() -> Router {
    let config = EnvironmentConfig {
        simulation_seed: Some(7),
        ..EnvironmentConfig::default()
    };
    create_router(AppState::new(config))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "tech@fleet.io", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_validation_messages() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please fill in all fields");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "technician", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a valid email address");
}

#[tokio::test]
async fn test_login_returns_session() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "tech@fleet.io");
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = create_test_app();

    for uri in ["/api/vehicles", "/api/training/overview", "/api/monitoring", "/api/auth/session"] {
        let (status, _) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let (status, _) = send(&app, Method::GET, "/api/vehicles", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vehicle_query_filters_and_sorts() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/vehicles?status=active&sort_by=usageHours&order=desc",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);

    let vehicles = body["vehicles"].as_array().unwrap();
    assert!(vehicles.iter().all(|v| v["status"] == "active"));
    let hours: Vec<u64> = vehicles.iter().map(|v| v["usage_hours"].as_u64().unwrap()).collect();
    assert!(hours.windows(2).all(|w| w[0] >= w[1]));
    assert!(body.get("empty_message").is_none());
}

#[tokio::test]
async fn test_vehicle_query_empty_result() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/vehicles?search=zzz-no-match", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["empty_message"], "No vehicles found. Try adjusting your search.");
}

#[tokio::test]
async fn test_vehicle_stats() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/vehicles/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 9, "active": 6, "maintenance": 2, "inactive": 1, "alerts": 4 }));
}

#[tokio::test]
async fn test_unknown_vehicle_is_not_found() {
    let app = create_test_app();
    let token = login(&app).await;

    for uri in [
        "/api/vehicles/NOPE-999",
        "/api/telemetry/NOPE-999/sensors",
        "/api/telemetry/NOPE-999/faults",
        "/api/annotations/NOPE-999",
    ] {
        let (status, _) = send(&app, Method::GET, uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/monitoring/vehicle",
        Some(&token),
        Some(json!({ "vehicle_id": "NOPE-999" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_simulated_delete_keeps_vehicle() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/api/vehicles/BUS-001", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehicle deleted successfully!");

    let (status, _) = send(&app, Method::GET, "/api/vehicles/BUS-001", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_sensor_readings_cover_every_type() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/telemetry/CONST-003/sensors", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let readings = body.as_array().unwrap();
    assert_eq!(readings.len(), 7);
    assert!(readings.iter().all(|r| r["vehicle_id"] == "CONST-003"));

    let (status, body) = send(&app, Method::GET, "/api/telemetry/CONST-003/history", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn test_selected_vehicle_annotations_flag_hydraulics() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/monitoring/vehicle",
        Some(&token),
        Some(json!({ "vehicle_id": "CONST-003" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle_id"], "CONST-003");

    let (status, body) = send(&app, Method::GET, "/api/annotations/CONST-003", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let points = body["points"].as_array().unwrap();
    let hydraulics = points.iter().find(|p| p["component"] == "Hydraulics").unwrap();
    assert_eq!(hydraulics["type"], "critical");
    assert!(hydraulics["description"]
        .as_str()
        .unwrap()
        .contains("Immediate maintenance required."));

    let alerts = body["alerts"].as_array().unwrap();
    assert!(alerts
        .iter()
        .any(|a| a["point_id"] == hydraulics["id"] && a["notification"]["level"] == "error"));
}

#[tokio::test]
async fn test_training_overview_and_launch() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/training/overview", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "available_modules": 3, "average_completion": 62, "total_minutes": 195 }));

    let (status, body) = send(&app, Method::GET, "/api/training/modules?difficulty=advanced", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().all(|m| m["difficulty"] == "advanced"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/training/modules/vr-module-1/launch",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Launching VR Training");

    let (status, _) = send(&app, Method::GET, "/api/training/modules/vr-module-9", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_monitoring_toggle() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/monitoring", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["live"], false);
    assert_eq!(body["vehicle_id"], "BUS-001");

    let (status, body) = send(&app, Method::POST, "/api/monitoring/live", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["live"], true);
    assert_eq!(body["notification"]["title"], "Live monitoring activated");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/monitoring/live",
        Some(&token),
        Some(json!({ "enabled": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["live"], false);
    assert_eq!(body["notification"]["title"], "Live monitoring paused");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/monitoring/faults?status=resolved",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["faults"].as_array().unwrap().iter().all(|f| f["status"] == "resolved"));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::POST, "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully logged out");

    let (status, _) = send(&app, Method::GET, "/api/vehicles", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

async fn sensor_values(app: &Router, token: &str) -> Vec<f64> {
    let (status, body) = send(app, Method::GET, "/api/telemetry/BUS-001/sensors", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["value"].as_f64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_seeded_sensor_calls_differ_and_replay() {
    let app = create_test_app();
    let token = login(&app).await;
    let first = sensor_values(&app, &token).await;
    let second = sensor_values(&app, &token).await;
    assert_ne!(first, second);

    let replay = create_test_app();
    let token = login(&replay).await;
    assert_eq!(sensor_values(&replay, &token).await, first);
    assert_eq!(sensor_values(&replay, &token).await, second);
}

#[tokio::test]
async fn test_each_session_reads_its_own_monitor() {
    let app = create_test_app();
    let first = login(&app).await;
    let second = login(&app).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/monitoring/vehicle",
        Some(&first),
        Some(json!({ "vehicle_id": "FIRE-002" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/monitoring", Some(&first), None).await;
    assert_eq!(body["vehicle_id"], "FIRE-002");
    let (_, body) = send(&app, Method::GET, "/api/monitoring", Some(&second), None).await;
    assert_eq!(body["vehicle_id"], "BUS-001");

    let (status, body) = send(&app, Method::GET, "/api/monitoring/faults", Some(&second), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle_id"], "BUS-001");

    let (status, body) = send(&app, Method::POST, "/api/monitoring/notifications/ack", Some(&first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}
