use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::domain::ChoiceCatalog;
use super::random::RandomSource;
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the assessment endpoint and the choice lists.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: RandomSource + 'static,
{
    Router::new()
        .route("/api/analyze/", post(analyze_handler::<S>))
        .route("/api/analyze", post(analyze_handler::<S>))
        .route("/api/choices/", get(choices_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: RandomSource + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.assess(&payload) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(AssessmentServiceError::Validation(errors)) => {
            let rejected: Vec<&str> = errors.fields().collect();
            info!(fields = ?rejected, "rejected injury report");
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
    }
}

pub(crate) async fn choices_handler() -> Json<ChoiceCatalog> {
    Json(ChoiceCatalog::current())
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let status = match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    let detail = match status {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => rejection.body_text(),
        _ => format!("JSON parse error - {}", rejection.body_text()),
    };
    (status, Json(json!({ "detail": detail }))).into_response()
}
