use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::coding_problem;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

/// Result of the mock evaluator. Nothing about an evaluation is persisted.
#[derive(Debug, Serialize, Default)]
pub struct EvaluationResult {
    pub status: String,
    pub message: String,
    pub test_cases_passed: usize,
    pub total_test_cases: usize,
}

/// Loads a coding problem or produces the standard `404` response.
pub async fn find_problem_or_404(
    db: &DatabaseConnection,
    problem_id: i64,
) -> Result<coding_problem::Model, Response> {
    match coding_problem::Entity::find_by_id(problem_id).one(db).await {
        Ok(Some(problem)) => Ok(problem),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Coding problem not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}
