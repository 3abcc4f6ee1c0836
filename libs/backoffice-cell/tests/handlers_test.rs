use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use backoffice_cell::router::backoffice_routes;
use shared_database::seed::{CROWN_ORDER_ID, CROWN_PLAN_ID, PATIENT_AHMED_ID, PRECISION_LAB_ID};
use shared_utils::test_utils::{demo_state, read_json};

fn app() -> Router {
    backoffice_routes(Arc::new(demo_state()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_patients_by_status() {
    let response = app().oneshot(get("/patients?status=in_treatment")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["patients"][0]["name"], "Fatima Ali Al-Saad");
}

#[tokio::test]
async fn test_search_patients() {
    let response = app().oneshot(get("/patients/search?q=cleaning")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["patients"][0]["id"], PATIENT_AHMED_ID.to_string());
}

#[tokio::test]
async fn test_patient_lab_orders_and_plans() {
    let app = app();

    let orders = app
        .clone()
        .oneshot(get(&format!("/patients/{}/lab-orders", PATIENT_AHMED_ID)))
        .await
        .unwrap();
    let body = read_json(orders).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["lab_orders"][0]["id"], CROWN_ORDER_ID.to_string());

    let plans = app
        .oneshot(get(&format!("/patients/{}/treatment-plans", PATIENT_AHMED_ID)))
        .await
        .unwrap();
    let body = read_json(plans).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["treatment_plans"][0]["id"], CROWN_PLAN_ID.to_string());
}

#[tokio::test]
async fn test_unknown_patient_is_404() {
    let response = app()
        .oneshot(get(&format!("/patients/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_lab_order() {
    let app = app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/lab-orders",
            json!({
                "patient_id": PATIENT_AHMED_ID,
                "laboratory_id": PRECISION_LAB_ID,
                "order_type": "crown",
                "description": "Temporary crown",
                "order_date": "2024-01-22",
                "cost": 75000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["lab_order"]["status"], "ordered");
    assert_eq!(body["lab_order"]["expected_delivery_date"], "2024-01-27");
    assert_eq!(body["lab_order"]["payment_status"], "pending");

    let stats = app.oneshot(get("/stats?date=2024-01-22")).await.unwrap();
    let body = read_json(stats).await;
    assert_eq!(body["stats"]["this_month_lab_costs"], 75000);
    assert_eq!(body["stats"]["pending_lab_orders"], 2);
}

#[tokio::test]
async fn test_reopening_installed_order_conflicts() {
    let app = app();
    let uri = format!("/lab-orders/{}/status", CROWN_ORDER_ID);

    let installed = app
        .clone()
        .oneshot(send_json("PATCH", &uri, json!({ "status": "installed" })))
        .await
        .unwrap();
    assert_eq!(installed.status(), StatusCode::OK);

    let reopened = app
        .oneshot(send_json("PATCH", &uri, json!({ "status": "ordered" })))
        .await
        .unwrap();
    assert_eq!(reopened.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_and_approve_treatment_plan() {
    let app = app();
    let created = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/treatment-plans",
            json!({
                "patient_id": PATIENT_AHMED_ID,
                "doctor_id": "doc1",
                "doctor_name": "Dr. Sara Ahmed",
                "title": "Whitening course",
                "phases": [
                    { "title": "Consultation", "estimated_duration": 1, "cost": 25000 },
                    { "title": "Whitening", "estimated_duration": 14, "cost": 150000 }
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = read_json(created).await;
    assert_eq!(body["treatment_plan"]["total_cost"], 175000);
    assert_eq!(body["treatment_plan"]["estimated_duration"], 15);
    assert_eq!(body["treatment_plan"]["status"], "draft");
    let plan_id = body["treatment_plan"]["id"].as_str().unwrap().to_string();

    let approved = app
        .oneshot(send_json(
            "PATCH",
            &format!("/treatment-plans/{}/status", plan_id),
            json!({ "status": "approved" }),
        ))
        .await
        .unwrap();
    assert_eq!(approved.status(), StatusCode::OK);
    let body = read_json(approved).await;
    assert_eq!(body["treatment_plan"]["status"], "approved");
    assert!(body["treatment_plan"]["approved_date"].is_string());
}

#[tokio::test]
async fn test_stats_endpoint() {
    let response = app().oneshot(get("/stats?date=2024-01-22")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["date"], "2024-01-22");
    assert_eq!(body["stats"]["today_appointments"], 1);
    assert_eq!(body["stats"]["total_patients"], 2);
    assert_eq!(body["stats"]["net_profit"], 50000);
    assert_eq!(body["stats"]["active_staff"], 5);
    assert_eq!(body["stats"]["low_stock"], 4);
}

#[tokio::test]
async fn test_laboratories_listing() {
    let response = app().oneshot(get("/laboratories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_create_and_update_patient() {
    let app = app();
    let created = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/patients",
            json!({
                "name": "Noor Hadi",
                "phone": "+964 770 321 6540",
                "age": 24,
                "treatment": "Orthodontics"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = read_json(created).await;
    assert_eq!(body["patient"]["status"], "active");
    let patient_id = body["patient"]["id"].as_str().unwrap().to_string();

    let updated = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/patients/{}", patient_id),
            json!({ "status": "urgent", "priority": "high" }),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    let body = read_json(updated).await;
    assert_eq!(body["patient"]["status"], "urgent");
    assert_eq!(body["patient"]["name"], "Noor Hadi");

    let fetched = app
        .oneshot(get(&format!("/patients/{}", patient_id)))
        .await
        .unwrap();
    let body = read_json(fetched).await;
    assert_eq!(body["priority"], "high");
}

#[tokio::test]
async fn test_update_unknown_patient_is_404() {
    let response = app()
        .oneshot(send_json(
            "PATCH",
            &format!("/patients/{}", uuid::Uuid::new_v4()),
            json!({ "age": 50 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_laboratory() {
    let app = app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/laboratories",
            json!({
                "name": "Tigris Dental Lab",
                "phone": "+964 770 900 8080",
                "average_delivery_time": 3,
                "quality_rating": 4.2,
                "price_range": "low"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["laboratory"]["is_active"], true);
    assert_eq!(body["laboratory"]["price_range"], "low");

    let listing = app.oneshot(get("/laboratories")).await.unwrap();
    let body = read_json(listing).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_staff_inventory_and_ledger_routes() {
    let app = app();

    let staff = app.clone().oneshot(get("/staff?status=active")).await.unwrap();
    assert_eq!(staff.status(), StatusCode::OK);
    assert_eq!(read_json(staff).await["total"], 5);

    let inventory = app.clone().oneshot(get("/inventory?low_stock=true")).await.unwrap();
    assert_eq!(inventory.status(), StatusCode::OK);
    assert_eq!(read_json(inventory).await["total"], 4);

    let ledger = app
        .oneshot(get("/financial-records?record_type=income"))
        .await
        .unwrap();
    assert_eq!(ledger.status(), StatusCode::OK);
    let body = read_json(ledger).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["income"], 50000);
    assert_eq!(body["expenses"], 0);
}
