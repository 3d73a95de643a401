use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404};
use crate::routes::courses::common::CourseWithTeacher;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, enrollment, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use util::state::AppState;

/// GET /courses
///
/// Lists every published course with the owning teacher's name and email.
/// Public: no authentication required.
pub async fn get_courses(State(app_state): State<AppState>) -> Result<Response, Response> {
    let db = app_state.db();

    let courses = course::Entity::find()
        .filter(course::Column::IsPublished.eq(true))
        .find_also_related(user::Entity)
        .all(db)
        .await
        .map_err(db_error)?;

    let payload: Vec<CourseWithTeacher> = courses
        .into_iter()
        .map(|(c, t)| CourseWithTeacher::from_pair(c, t))
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(payload, "Courses retrieved successfully")),
    )
        .into_response())
}

/// GET /courses/my-courses
///
/// Lists the authenticated teacher's own courses, any publish state.
pub async fn get_my_courses(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let courses = course::Entity::find()
        .filter(course::Column::TeacherId.eq(claims.sub))
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(courses, "Courses retrieved successfully")),
    )
        .into_response())
}

/// GET /courses/enrolled
///
/// Lists the courses the authenticated student is enrolled in.
pub async fn get_enrolled_courses(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = enrollment::Model::enrolled_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let courses = course::Entity::find()
        .filter(course::Column::Id.is_in(course_ids))
        .find_also_related(user::Entity)
        .all(db)
        .await
        .map_err(db_error)?;

    let payload: Vec<CourseWithTeacher> = courses
        .into_iter()
        .map(|(c, t)| CourseWithTeacher::from_pair(c, t))
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Enrolled courses retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /courses/{course_id}
///
/// Returns a single course regardless of publish state. Public.
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course = find_course_or_404(db, course_id).await?;
    let teacher = user::Entity::find_by_id(course.teacher_id)
        .one(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            CourseWithTeacher::from_pair(course, teacher),
            "Course retrieved successfully",
        )),
    )
        .into_response())
}

#[derive(Debug, Serialize, Default)]
pub struct EnrollmentStatus {
    pub is_enrolled: bool,
}

/// GET /courses/{course_id}/enrollment-status
///
/// Reports whether the authenticated user is enrolled in the course.
/// Idempotent; teachers simply always read `false`.
pub async fn enrollment_status(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let is_enrolled = enrollment::Model::find_by_pair(db, claims.sub, course_id)
        .await
        .map_err(db_error)?
        .is_some();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            EnrollmentStatus { is_enrolled },
            "Enrollment status retrieved successfully",
        )),
    )
        .into_response())
}
