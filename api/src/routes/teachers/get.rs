use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{assignment, course, enrollment, quiz, quiz_attempt, submission, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;
use util::state::AppState;

#[derive(Debug, serde::Serialize)]
pub struct StudentOverview {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub courses_enrolled: u64,
    pub assignments_submitted: u64,
    pub quizzes_attempted: u64,
}

/// GET /teachers/students
///
/// Lists the distinct students enrolled in any course the authenticated
/// teacher owns, each with activity counts scoped to those courses.
pub async fn get_students(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = course::Model::owned_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::CourseId.is_in(course_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?;

    let mut courses_by_student: HashMap<i64, u64> = HashMap::new();
    for e in &enrollments {
        *courses_by_student.entry(e.student_id).or_default() += 1;
    }

    let assignment_ids: Vec<i64> = assignment::Entity::find()
        .filter(assignment::Column::CourseId.is_in(course_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|a| a.id)
        .collect();

    let quiz_ids: Vec<i64> = quiz::Entity::find()
        .filter(quiz::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|q| q.id)
        .collect();

    let mut submissions_by_student: HashMap<i64, u64> = HashMap::new();
    for s in submission::Entity::find()
        .filter(submission::Column::AssignmentId.is_in(assignment_ids))
        .all(db)
        .await
        .map_err(db_error)?
    {
        *submissions_by_student.entry(s.student_id).or_default() += 1;
    }

    let mut attempts_by_student: HashMap<i64, u64> = HashMap::new();
    for a in quiz_attempt::Entity::find()
        .filter(quiz_attempt::Column::QuizId.is_in(quiz_ids))
        .all(db)
        .await
        .map_err(db_error)?
    {
        *attempts_by_student.entry(a.student_id).or_default() += 1;
    }

    let student_ids: Vec<i64> = courses_by_student.keys().copied().collect();
    let students = user::Entity::find()
        .filter(user::Column::Id.is_in(student_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let payload: Vec<StudentOverview> = students
        .into_iter()
        .map(|student| StudentOverview {
            courses_enrolled: courses_by_student.get(&student.id).copied().unwrap_or(0),
            assignments_submitted: submissions_by_student
                .get(&student.id)
                .copied()
                .unwrap_or(0),
            quizzes_attempted: attempts_by_student.get(&student.id).copied().unwrap_or(0),
            id: student.id,
            name: student.name,
            email: student.email,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Students retrieved successfully",
        )),
    )
        .into_response())
}
