use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::bulk::UploadedEmployee;
use super::domain::ManualSubmission;
use super::intake::IntakeError;
use super::service::{AttritionService, AttritionServiceError};
use super::session::SessionStore;

/// Router builder exposing the prediction, upload and drill-down endpoints.
pub fn attrition_router<S>(service: Arc<AttritionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/attrition/predict", post(predict_handler::<S>))
        .route("/api/v1/attrition/upload", post(upload_handler::<S>))
        .route(
            "/api/v1/attrition/bulk",
            get(bulk_handler::<S>).post(rows_handler::<S>),
        )
        .route(
            "/api/v1/attrition/bulk/:employee_id",
            get(selection_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn predict_handler<S>(
    State(service): State<Arc<AttritionService<S>>>,
    Json(submission): Json<ManualSubmission>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.predict_manual(submission) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn upload_handler<S>(
    State(service): State<Arc<AttritionService<S>>>,
    body: Bytes,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.upload_reader(&body[..]) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn rows_handler<S>(
    State(service): State<Arc<AttritionService<S>>>,
    Json(rows): Json<Vec<UploadedEmployee>>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.score_rows(&rows) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn bulk_handler<S>(State(service): State<Arc<AttritionService<S>>>) -> Response
where
    S: SessionStore + 'static,
{
    match service.bulk_results() {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn selection_handler<S>(
    State(service): State<Arc<AttritionService<S>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.select(&employee_id) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AttritionServiceError) -> Response {
    let status = match &err {
        AttritionServiceError::Submission(_)
        | AttritionServiceError::DuplicateEmployee(_)
        | AttritionServiceError::Intake(IntakeError::NoData) => StatusCode::UNPROCESSABLE_ENTITY,
        AttritionServiceError::Intake(_) => StatusCode::BAD_REQUEST,
        AttritionServiceError::NoBulkResults | AttritionServiceError::UnknownEmployee(_) => {
            StatusCode::NOT_FOUND
        }
        AttritionServiceError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}
