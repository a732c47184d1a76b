use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::CatalogRepository;
use super::questionnaire::QuestionnaireAnswers;
use super::repository::{RecommendationRepository, RepositoryError, SessionId};
use super::service::{BuildSessionError, BuildSessionService};

/// Router builder exposing the questionnaire intake and session lookup endpoints.
pub fn recommendation_router<C, R>(service: Arc<BuildSessionService<C, R>>) -> Router
where
    C: CatalogRepository + 'static,
    R: RecommendationRepository + 'static,
{
    Router::new()
        .route("/api/v1/builds", post(submit_handler::<C, R>))
        .route("/api/v1/builds/:session_id", get(status_handler::<C, R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<C, R>(
    State(service): State<Arc<BuildSessionService<C, R>>>,
    axum::Json(answers): axum::Json<QuestionnaireAnswers>,
) -> Response
where
    C: CatalogRepository + 'static,
    R: RecommendationRepository + 'static,
{
    match service.submit(&answers) {
        Ok(record) => {
            let view = record.session_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(BuildSessionError::Engine(error)) if error.is_client_error() => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(BuildSessionError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "build session already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<C, R>(
    State(service): State<Arc<BuildSessionService<C, R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
    R: RecommendationRepository + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.session_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(BuildSessionError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("build session '{}' not found", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
