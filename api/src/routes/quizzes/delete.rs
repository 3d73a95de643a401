use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use crate::routes::quizzes::common::find_quiz_or_404;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::question;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /quizzes/{quiz_id}
///
/// Deletes a quiz from a course the authenticated teacher owns. Questions
/// and attempts are left in place.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → quiz missing
pub async fn delete_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;
    let course = find_course_or_404(db, quiz.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    quiz.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Quiz deleted successfully")),
    )
        .into_response())
}

/// DELETE /quizzes/questions/{question_id}
///
/// Deletes a question. Ownership resolves through the question's quiz and
/// course.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → question missing
pub async fn delete_question(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(question_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let question = question::Entity::find_by_id(question_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Question not found")),
            )
                .into_response()
        })?;

    let course = question
        .course(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
            )
                .into_response()
        })?;
    require_course_owner(&course, claims.sub)?;

    question.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Question deleted successfully")),
    )
        .into_response())
}
