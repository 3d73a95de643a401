use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, format_validation_errors, require_course_owner};
use crate::routes::quizzes::common::{AttemptOutcome, find_quiz_or_404};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz_attempt::{self, AttemptAnswer, score_answers};
use db::models::{question, quiz};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    pub course_id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Time limit cannot be negative"))]
    pub time_limit: Option<i32>,
}

/// POST /quizzes
///
/// Creates a quiz in a course the authenticated teacher owns. New quizzes
/// start unpublished and with no questions.
///
/// ### Responses
/// - `201 Created` → the quiz
/// - `400 Bad Request` → validation failure
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn create_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateQuizRequest>,
) -> Result<Response, Response> {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response());
    }

    let db = app_state.db();

    let course = find_course_or_404(db, req.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let quiz = quiz::Model::create(db, req.course_id, &req.title, req.description, req.time_limit)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(quiz, "Quiz created successfully")),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: i32,
    pub order: Option<i32>,
}

/// POST /quizzes/{quiz_id}/questions
///
/// Adds a multiple-choice question to a quiz. Exactly four options are
/// required and `correct_index` must point into them.
///
/// ### Responses
/// - `201 Created` → the question (including the answer key; this endpoint
///   is teacher-only)
/// - `400 Bad Request` → wrong option count or out-of-range index
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → quiz missing
pub async fn create_question(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Response, Response> {
    if req.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Question text is required")),
        )
            .into_response());
    }
    if req.options.len() != 4 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Exactly 4 options are required")),
        )
            .into_response());
    }
    if !(0..4).contains(&req.correct_index) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Correct index must be between 0 and 3",
            )),
        )
            .into_response());
    }

    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;
    let course = find_course_or_404(db, quiz.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let question = question::Model::create(
        db,
        quiz_id,
        &req.text,
        req.options,
        req.correct_index,
        req.order,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(question, "Question added successfully")),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct AttemptRequest {
    pub answers: Vec<AttemptAnswer>,
}

/// POST /quizzes/{quiz_id}/attempt
///
/// Scores and persists a quiz attempt for the authenticated student.
/// An answer counts only when its question belongs to this quiz and the
/// selected index matches; unknown question ids and omitted questions score
/// zero without erroring. Every call creates a new attempt row; there is no
/// attempt limit.
///
/// ### Responses
/// - `201 Created` → attempt, score, total, and a per-question breakdown
/// - `400 Bad Request` → quiz not published
/// - `404 Not Found` → quiz missing
pub async fn attempt_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
    Json(req): Json<AttemptRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;

    if !quiz.is_published {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Cannot attempt an unpublished quiz",
            )),
        )
            .into_response());
    }

    let questions = question::Model::for_quiz(db, quiz_id)
        .await
        .map_err(db_error)?;

    let (score, results) = score_answers(&questions, &req.answers);
    let total_questions = questions.len() as i32;

    let attempt = quiz_attempt::Model::create(
        db,
        quiz_id,
        claims.sub,
        req.answers,
        score,
        total_questions,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            AttemptOutcome {
                attempt,
                score,
                total_questions,
                results,
            },
            "Quiz attempted successfully",
        )),
    )
        .into_response())
}
