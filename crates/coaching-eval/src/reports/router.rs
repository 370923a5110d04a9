use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CoachingReportSubmission, ReportId};
use super::repository::{RepositoryError, ReportRepository, ReportSummaryView};
use super::service::{CoachingReportService, ReportServiceError};
use crate::evaluation::{catalog, EvaluationCriterion, RatingSet};

/// Body of a live scoring request sent on every rating change.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub ratings: RatingSet,
}

/// Router builder exposing the catalog, live scoring, and report endpoints.
pub fn coaching_router<R>(service: Arc<CoachingReportService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/coaching/criteria", get(criteria_handler))
        .route("/api/v1/coaching/score", post(score_handler::<R>))
        .route("/api/v1/coaching/reports", post(submit_handler::<R>))
        .route(
            "/api/v1/coaching/reports/:report_id",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/coaching/representatives/:representative/reports",
            get(history_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn criteria_handler() -> Json<&'static [EvaluationCriterion]> {
    Json(catalog::catalog())
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<CoachingReportService<R>>>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.score(&request.ratings) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(ReportServiceError::Submission(violation)) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            violation.to_string(),
        ),
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CoachingReportService<R>>>,
    Json(submission): Json<CoachingReportSubmission>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, Json(record.summary_view())).into_response(),
        Err(ReportServiceError::Submission(violation)) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            violation.to_string(),
        ),
        Err(ReportServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "report already exists".to_string())
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<CoachingReportService<R>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let id = ReportId(report_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.summary_view())).into_response(),
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "report_id": id.0,
                "error": "report not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<CoachingReportService<R>>>,
    Path(representative): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.history(&representative) {
        Ok(records) => {
            let views: Vec<ReportSummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
