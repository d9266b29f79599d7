use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::attrition::router::{attrition_router, selection_handler};

#[tokio::test]
async fn predict_route_returns_ranked_prediction() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let payload = serde_json::to_vec(&submission()).expect("serialize submission");
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_score"], json!(95));
    assert_eq!(body["will_leave"], json!(true));
    assert_eq!(body["reasons"][0]["factor"], json!("Overtime Required"));
    assert_eq!(body["reasons"][0]["direction"], json!("increases_risk"));
    assert_eq!(body["chart"][1]["label"], json!("Low Job"));
}

#[tokio::test]
async fn predict_route_rejects_out_of_range_payloads() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let mut payload = submission();
    payload.age = 70;
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&payload).expect("serialize submission"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("age"));
}

#[tokio::test]
async fn upload_route_scores_csv_and_enables_selection() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/upload")
                .header(header::CONTENT_TYPE, "text/csv")
                .body(Body::from(SAMPLE_CSV))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["processed_rows"], json!(3));
    assert_eq!(body["tiers"]["high"], json!(1));
    assert_eq!(body["entries"][0]["id"], json!("EMP001"));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/attrition/bulk/EMP002")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_name"], json!("Michael Chen"));
    assert_eq!(body["risk_score"], json!(5));
}

#[tokio::test]
async fn upload_route_flags_header_only_files() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/upload")
                .body(Body::from("Name,Department,Age\n"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        json!("no valid data found in employee upload")
    );
}

#[tokio::test]
async fn bulk_rows_route_accepts_sparse_rows() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let rows = json!([
        { "id": "EMP001", "name": "Sarah Johnson", "department": "Sales", "tenure": 3, "satisfaction": 0.4 },
        { "id": "EMP002", "name": "Michael Chen", "department": "Engineering", "tenure": 5, "satisfaction": 0.8,
          "overtime": false, "work_life_balance": 3, "monthly_income": 6400.0 }
    ]);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/bulk")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(rows.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().expect("entries").len(), 2);
    // 30 - 20 (long tenure), satisfaction rounds to 3.
    assert_eq!(body["entries"][1]["risk_score"], json!(10));
}

#[tokio::test]
async fn bulk_route_reports_missing_session() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/attrition/bulk")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn selection_handler_returns_not_found_for_unknown_rows() {
    let (service, _) = build_service();
    service.score_rows(&sample_rows()).expect("rows scored");

    let response =
        selection_handler::<MemoryStore>(State(service), Path("EMP404".to_string())).await;

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("EMP404"));
}

#[tokio::test]
async fn unreadable_upload_clears_session_and_returns_json_error() {
    let (service, _) = build_service();
    service.upload(SAMPLE_CSV).expect("upload succeeds");
    let router = attrition_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/upload")
                .header(header::CONTENT_TYPE, "text/csv")
                .body(Body::from(&b"name,age\n\xff\xfe,30\n"[..]))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("not readable CSV"));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/attrition/bulk")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_rows_route_rejects_duplicate_identifiers() {
    let (service, _) = build_service();
    let router = attrition_router(service);

    let rows = json!([
        { "id": "EMP001", "name": "Sarah Johnson", "department": "Sales", "tenure": 3, "satisfaction": 0.4 },
        { "id": "EMP001", "name": "Michael Chen", "department": "Engineering", "tenure": 5, "satisfaction": 0.8 }
    ]);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attrition/bulk")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(rows.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("EMP001"));
}
