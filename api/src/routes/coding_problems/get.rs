use crate::response::ApiResponse;
use crate::routes::coding_problems::common::find_problem_or_404;
use crate::routes::common::db_error;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::coding_problem::{self, Difficulty};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProblemFilter {
    pub course_id: Option<i64>,
    pub difficulty: Option<Difficulty>,
}

/// GET /coding-problems
///
/// Lists coding problems, optionally filtered by `course_id` and
/// `difficulty` query parameters. Public.
pub async fn get_problems(
    State(app_state): State<AppState>,
    Query(filter): Query<ProblemFilter>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let mut query = coding_problem::Entity::find();
    if let Some(course_id) = filter.course_id {
        query = query.filter(coding_problem::Column::CourseId.eq(course_id));
    }
    if let Some(difficulty) = filter.difficulty {
        query = query.filter(coding_problem::Column::Difficulty.eq(difficulty));
    }

    let problems = query
        .order_by_desc(coding_problem::Column::CreatedAt)
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            problems,
            "Coding problems retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /coding-problems/{problem_id}
///
/// Returns a single coding problem. Public.
pub async fn get_problem(
    State(app_state): State<AppState>,
    Path(problem_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let problem = find_problem_or_404(db, problem_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            problem,
            "Coding problem retrieved successfully",
        )),
    )
        .into_response())
}
