use std::sync::Arc;

use axum::{routing::get, Router};

use backoffice_cell::router::backoffice_routes;
use booking_cell::router::booking_routes;
use clinic_cell::router::clinic_routes;
use shared_utils::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .route("/api/ping", get(|| async { "pong" }))
        .nest(
            "/api/clinics",
            clinic_routes(state.clone()).merge(booking_routes(state.clone())),
        )
        .nest("/api/clinic-admin", backoffice_routes(state))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use shared_utils::test_utils::{demo_state, read_json};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        create_router(Arc::new(demo_state()))
    }

    #[tokio::test]
    async fn test_ping() {
        let response = app()
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_clinic_and_booking_routes_share_prefix() {
        let app = app();

        let clinics = app
            .clone()
            .oneshot(Request::builder().uri("/api/clinics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(clinics.status(), StatusCode::OK);
        let body = read_json(clinics).await;
        let clinic_id = body["clinics"][0]["id"].as_str().unwrap().to_string();

        let slots = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/clinics/{}/slots?date=2024-01-23", clinic_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(slots.status(), StatusCode::OK);
        let slot_body = read_json(slots).await;
        let time = slot_body["slots"][0]["time"].as_str().unwrap().to_string();

        let booking = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/clinics/{}/bookings", clinic_id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({
                            "patient_name": "Zainab Kareem",
                            "patient_phone": "+964 780 555 1212",
                            "patient_email": "zainab.kareem@email.com",
                            "date": "2024-01-23",
                            "time": time,
                            "treatment": "Teeth Cleaning"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(booking.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_oversized_slot_duration_leaves_slots_intact() {
        let app = app();
        let clinics = app
            .clone()
            .oneshot(Request::builder().uri("/api/clinics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = read_json(clinics).await;
        let clinic_id = body["clinics"][0]["id"].as_str().unwrap().to_string();

        let patched = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/clinics/{}/booking-settings", clinic_id))
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "time_slot_duration": 4294967295u32 }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(patched.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let slots = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/clinics/{}/slots?date=2024-01-22", clinic_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(slots.status(), StatusCode::OK);
        let body = read_json(slots).await;
        assert_eq!(body["total"], 16);
    }

    #[tokio::test]
    async fn test_admin_routes_are_nested() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/clinic-admin/stats?date=2024-01-22")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
