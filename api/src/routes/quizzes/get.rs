use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use crate::routes::quizzes::common::{
    AttemptWithStudent, QuizAttemptSummary, QuizForStudent, QuizForTeacher, SafeQuestion,
    find_quiz_or_404,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, enrollment, question, quiz, quiz_attempt, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use util::state::AppState;

/// GET /quizzes/course/{course_id}
///
/// Lists a course's published quizzes. Public.
pub async fn get_quizzes_by_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let quizzes = quiz::Entity::find()
        .filter(quiz::Column::CourseId.eq(course_id))
        .filter(quiz::Column::IsPublished.eq(true))
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(quizzes, "Quizzes retrieved successfully")),
    )
        .into_response())
}

/// GET /quizzes/my-quizzes
///
/// Lists quizzes across every course the authenticated teacher owns, any
/// publish state.
pub async fn get_my_quizzes(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = course::Model::owned_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let quizzes = quiz::Entity::find()
        .filter(quiz::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(quizzes, "Quizzes retrieved successfully")),
    )
        .into_response())
}

/// GET /quizzes/my-attempts
///
/// Overview for the authenticated student: every published quiz in their
/// enrolled courses, flagged with the result of their first attempt.
pub async fn get_my_attempts(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = enrollment::Model::enrolled_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let quizzes = quiz::Entity::find()
        .filter(quiz::Column::CourseId.is_in(course_ids))
        .filter(quiz::Column::IsPublished.eq(true))
        .all(db)
        .await
        .map_err(db_error)?;

    let quiz_ids: Vec<i64> = quizzes.iter().map(|q| q.id).collect();
    let attempts = quiz_attempt::Entity::find()
        .filter(quiz_attempt::Column::StudentId.eq(claims.sub))
        .filter(quiz_attempt::Column::QuizId.is_in(quiz_ids))
        .order_by_asc(quiz_attempt::Column::Id)
        .all(db)
        .await
        .map_err(db_error)?;

    // First attempt per quiz wins the summary slot.
    let mut first_attempts: HashMap<i64, quiz_attempt::Model> = HashMap::new();
    for attempt in attempts {
        first_attempts.entry(attempt.quiz_id).or_insert(attempt);
    }

    let payload: Vec<QuizAttemptSummary> = quizzes
        .into_iter()
        .map(|q| {
            let attempt = first_attempts.remove(&q.id);
            match attempt {
                Some(a) => QuizAttemptSummary {
                    quiz: q,
                    attempted: true,
                    score: Some(a.score),
                    total: Some(a.total),
                    attempt_id: Some(a.id),
                },
                None => QuizAttemptSummary {
                    quiz: q,
                    attempted: false,
                    score: None,
                    total: None,
                    attempt_id: None,
                },
            }
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Quiz attempts retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /quizzes/{quiz_id}
///
/// Returns a quiz with its questions ordered by display position. Teachers
/// get full questions; students get the projection without `correct_index`.
pub async fn get_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;
    let questions = question::Model::for_quiz(db, quiz_id)
        .await
        .map_err(db_error)?;

    if claims.is_teacher() {
        return Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                QuizForTeacher { quiz, questions },
                "Quiz retrieved successfully",
            )),
        )
            .into_response());
    }

    let questions: Vec<SafeQuestion> = questions.into_iter().map(SafeQuestion::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            QuizForStudent { quiz, questions },
            "Quiz retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /quizzes/{quiz_id}/attempts
///
/// Students see only their own attempts. Teachers must own the quiz's
/// course and get every attempt with the student's name and email.
pub async fn get_attempts(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(quiz_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let quiz = find_quiz_or_404(db, quiz_id).await?;

    if claims.is_teacher() {
        let course = find_course_or_404(db, quiz.course_id).await?;
        require_course_owner(&course, claims.sub)?;

        let attempts = quiz_attempt::Entity::find()
            .filter(quiz_attempt::Column::QuizId.eq(quiz_id))
            .find_also_related(user::Entity)
            .all(db)
            .await
            .map_err(db_error)?;

        let payload: Vec<AttemptWithStudent> = attempts
            .into_iter()
            .map(|(a, u)| AttemptWithStudent::from_pair(a, u))
            .collect();

        return Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                payload,
                "Attempts retrieved successfully",
            )),
        )
            .into_response());
    }

    let attempts = quiz_attempt::Model::for_student(db, quiz_id, claims.sub)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            attempts,
            "Attempts retrieved successfully",
        )),
    )
        .into_response())
}
