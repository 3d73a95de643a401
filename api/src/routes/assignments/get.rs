use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::assignments::common::{
    AssignmentWithSubmission, SubmissionWithStudent, find_assignment_or_404,
};
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{assignment, course, enrollment, submission, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;
use util::state::AppState;

/// GET /assignments/course/{course_id}
///
/// Lists a course's assignments. Public.
pub async fn get_assignments_by_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let assignments = assignment::Entity::find()
        .filter(assignment::Column::CourseId.eq(course_id))
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            assignments,
            "Assignments retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /assignments/my-assignments
///
/// Lists assignments across the student's enrolled courses, each joined
/// with the student's own submission (or `null`).
pub async fn get_my_assignments(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = enrollment::Model::enrolled_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let assignments = assignment::Entity::find()
        .filter(assignment::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
    let mut submissions: HashMap<i64, submission::Model> = submission::Entity::find()
        .filter(submission::Column::StudentId.eq(claims.sub))
        .filter(submission::Column::AssignmentId.is_in(assignment_ids))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|s| (s.assignment_id, s))
        .collect();

    let payload: Vec<AssignmentWithSubmission> = assignments
        .into_iter()
        .map(|a| {
            let submission = submissions.remove(&a.id);
            AssignmentWithSubmission {
                assignment: a,
                submission,
            }
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Assignments retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /assignments/my-assignments-teacher
///
/// Lists assignments across every course the authenticated teacher owns.
pub async fn get_my_assignments_teacher(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = course::Model::owned_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let assignments = assignment::Entity::find()
        .filter(assignment::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            assignments,
            "Assignments retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /assignments/{assignment_id}
///
/// Returns a single assignment. Students additionally get their own
/// submission joined in (or `null`).
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let assignment = find_assignment_or_404(db, assignment_id).await?;

    let submission = if claims.is_student() {
        submission::Model::find_by_pair(db, assignment_id, claims.sub)
            .await
            .map_err(db_error)?
    } else {
        None
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            AssignmentWithSubmission {
                assignment,
                submission,
            },
            "Assignment retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /assignments/{assignment_id}/submissions
///
/// Lists every submission for an assignment with each student's name and
/// email. Only the owning teacher.
pub async fn get_submissions(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let assignment = find_assignment_or_404(db, assignment_id).await?;
    let course = find_course_or_404(db, assignment.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let submissions = submission::Entity::find()
        .filter(submission::Column::AssignmentId.eq(assignment_id))
        .find_also_related(user::Entity)
        .all(db)
        .await
        .map_err(db_error)?;

    let payload: Vec<SubmissionWithStudent> = submissions
        .into_iter()
        .map(|(s, u)| SubmissionWithStudent::from_pair(s, u))
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Submissions retrieved successfully",
        )),
    )
        .into_response())
}
