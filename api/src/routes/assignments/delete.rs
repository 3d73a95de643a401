use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::assignments::common::find_assignment_or_404;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::ModelTrait;
use util::state::AppState;

/// DELETE /assignments/{assignment_id}
///
/// Deletes an assignment from a course the authenticated teacher owns.
/// Submissions are left in place.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → assignment missing
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let assignment = find_assignment_or_404(db, assignment_id).await?;
    let course = find_course_or_404(db, assignment.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    assignment.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Assignment deleted successfully")),
    )
        .into_response())
}
