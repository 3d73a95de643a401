use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::coding_problems::common::find_problem_or_404;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::ModelTrait;
use util::state::AppState;

/// DELETE /coding-problems/{problem_id}
///
/// Deletes a coding problem. Ownership is enforced only when the problem is
/// attached to a course.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → attached course not owned
/// - `404 Not Found` → problem missing
pub async fn delete_problem(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(problem_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let problem = find_problem_or_404(db, problem_id).await?;

    if let Some(course_id) = problem.course_id {
        let course = find_course_or_404(db, course_id).await?;
        require_course_owner(&course, claims.sub)?;
    }

    problem.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            (),
            "Coding problem deleted successfully",
        )),
    )
        .into_response())
}
