use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use clinic_cell::router::clinic_routes;
use shared_database::seed::{AL_MANSOUR_CLINIC_ID, BAGHDAD_DENTAL_CENTER_ID};
use shared_utils::test_utils::{demo_state, read_json};

fn app() -> Router {
    clinic_routes(Arc::new(demo_state()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_clinics() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["clinics"][0]["name"], "Baghdad Dental Center");
    assert_eq!(body["clinics"][0]["working_hours"]["friday"]["is_open"], false);
    assert!(body["clinics"][0].get("distance_km").is_none());
}

#[tokio::test]
async fn test_list_clinics_by_rating_mode() {
    let response = app().oneshot(get("/?mode=rating&limit=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["clinics"][0]["name"], "Baghdad Dental Center");
}

#[tokio::test]
async fn test_nearby_clinics_include_distance() {
    let response = app()
        .oneshot(get("/nearby?lat=33.3152&lng=44.3661&radius_km=4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["clinics"][0]["id"], AL_MANSOUR_CLINIC_ID.to_string());
    assert!(body["clinics"][0]["distance_km"].as_f64().unwrap() < 4.0);
}

#[tokio::test]
async fn test_nearby_requires_coordinates() {
    let response = app().oneshot(get("/nearby?lat=33.3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_clinic_by_id() {
    let response = app()
        .oneshot(get(&format!("/{}", BAGHDAD_DENTAL_CENTER_ID)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["doctor_id"], "doc1");
    assert_eq!(body["time_slot_duration"], 30);
    assert_eq!(body["break_times"][0]["start"], "12:00");
}

#[tokio::test]
async fn test_get_unknown_clinic_is_404() {
    let response = app()
        .oneshot(get(&format!("/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Clinic not found"));
}

#[tokio::test]
async fn test_clinics_by_governorate() {
    let response = app().oneshot(get("/governorate/baghdad")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["governorate"], "baghdad");
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_patch_booking_settings() {
    let app = app();
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}/booking-settings", AL_MANSOUR_CLINIC_ID))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "time_slot_duration": 60,
                "break_times": [{ "start": "13:00", "end": "14:00" }]
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["clinic"]["time_slot_duration"], 60);
    assert_eq!(body["clinic"]["break_times"][0]["start"], "13:00");

    let fetched = app
        .oneshot(get(&format!("/{}", AL_MANSOUR_CLINIC_ID)))
        .await
        .unwrap();
    let body = read_json(fetched).await;
    assert_eq!(body["time_slot_duration"], 60);
}

#[tokio::test]
async fn test_patch_booking_settings_rejects_zero_duration() {
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}/booking-settings", AL_MANSOUR_CLINIC_ID))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "time_slot_duration": 0 }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_patch_booking_settings_rejects_duration_longer_than_a_day() {
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}/booking-settings", AL_MANSOUR_CLINIC_ID))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "time_slot_duration": 4294967295u32 }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
