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
use chrono::Utc;
use db::models::question::{self, QuestionOptions};
use db::models::quiz;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditQuizRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time_limit: Option<i32>,
    pub is_published: Option<bool>,
}

/// PUT /quizzes/{quiz_id}
///
/// Partially updates a quiz; publishing happens through `is_published`.
///
/// ### Responses
/// - `200 OK` → the updated quiz
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → quiz missing
pub async fn edit_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
    Json(req): Json<EditQuizRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;
    let course = find_course_or_404(db, quiz.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let mut active: quiz::ActiveModel = quiz.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(time_limit) = req.time_limit {
        active.time_limit = Set(time_limit);
    }
    if let Some(is_published) = req.is_published {
        active.is_published = Set(is_published);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(updated, "Quiz updated successfully")),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct EditQuestionRequest {
    pub text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_index: Option<i32>,
    pub order: Option<i32>,
}

/// PUT /quizzes/questions/{question_id}
///
/// Partially updates a question. The four-option shape and index range are
/// enforced the same as on creation. Ownership resolves through the
/// question's quiz and course.
///
/// ### Responses
/// - `200 OK` → the updated question
/// - `400 Bad Request` → wrong option count or out-of-range index
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → question missing
pub async fn edit_question(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(question_id): Path<i64>,
    Json(req): Json<EditQuestionRequest>,
) -> Result<Response, Response> {
    if let Some(ref options) = req.options {
        if options.len() != 4 {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Exactly 4 options are required")),
            )
                .into_response());
        }
    }
    if let Some(correct_index) = req.correct_index {
        if !(0..4).contains(&correct_index) {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    "Correct index must be between 0 and 3",
                )),
            )
                .into_response());
        }
    }

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

    let mut active: question::ActiveModel = question.into();
    if let Some(text) = req.text {
        active.text = Set(text);
    }
    if let Some(options) = req.options {
        active.options = Set(QuestionOptions(options));
    }
    if let Some(correct_index) = req.correct_index {
        active.correct_index = Set(correct_index);
    }
    if let Some(order) = req.order {
        active.order = Set(order);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(updated, "Question updated successfully")),
    )
        .into_response())
}
