use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Role;
use db::models::{assignment, course, enrollment, quiz, quiz_attempt, submission, user};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::collections::{HashMap, HashSet};
use util::state::AppState;

#[derive(Debug, serde::Serialize, Default)]
pub struct TeacherStats {
    pub student_count: u64,
    pub assignment_count: u64,
    pub quiz_count: u64,
}

/// GET /dashboard/teacher/stats
///
/// Platform-wide counts shown on the teacher dashboard.
pub async fn teacher_stats(State(app_state): State<AppState>) -> Result<Response, Response> {
    let db = app_state.db();

    let student_count = user::Entity::find()
        .filter(user::Column::Role.eq(Role::Student))
        .count(db)
        .await
        .map_err(db_error)?;
    let assignment_count = assignment::Entity::find().count(db).await.map_err(db_error)?;
    let quiz_count = quiz::Entity::find().count(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            TeacherStats {
                student_count,
                assignment_count,
                quiz_count,
            },
            "Dashboard stats retrieved successfully",
        )),
    )
        .into_response())
}

#[derive(Debug, serde::Serialize, Default)]
pub struct StudentStats {
    pub enrolled_courses_count: u64,
    pub pending_assignments_count: u64,
    pub completed_quizzes_count: u64,
}

/// GET /dashboard/student/stats
///
/// The caller's own activity counts: enrolled courses, assignments in those
/// courses without a submission yet, and quiz attempts taken.
pub async fn student_stats(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = enrollment::Model::enrolled_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;
    let enrolled_courses_count = course_ids.len() as u64;

    let assignments = assignment::Entity::find()
        .filter(assignment::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let submitted: HashSet<i64> = submission::Entity::find()
        .filter(submission::Column::StudentId.eq(claims.sub))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|s| s.assignment_id)
        .collect();

    let pending_assignments_count = assignments
        .iter()
        .filter(|a| !submitted.contains(&a.id))
        .count() as u64;

    let completed_quizzes_count = quiz_attempt::Entity::find()
        .filter(quiz_attempt::Column::StudentId.eq(claims.sub))
        .count(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            StudentStats {
                enrolled_courses_count,
                pending_assignments_count,
                completed_quizzes_count,
            },
            "Dashboard stats retrieved successfully",
        )),
    )
        .into_response())
}

#[derive(Debug, serde::Serialize)]
pub struct StudentAnalytics {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub total_marks: i64,
    pub total_quiz_score: i64,
    pub submissions_count: u64,
    pub attempts_count: u64,
}

/// GET /dashboard/teacher/analytics
///
/// Per-student rollup across every course the authenticated teacher owns:
/// summed assignment marks, summed quiz scores, and activity counts.
pub async fn teacher_analytics(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = course::Model::owned_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let assignment_ids: Vec<i64> = assignment::Entity::find()
        .filter(assignment::Column::CourseId.is_in(course_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|a| a.id)
        .collect();

    let quiz_ids: Vec<i64> = quiz::Entity::find()
        .filter(quiz::Column::CourseId.is_in(course_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|q| q.id)
        .collect();

    let student_ids: Vec<i64> = enrollment::Entity::find()
        .filter(enrollment::Column::CourseId.is_in(course_ids))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|e| e.student_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let students = user::Entity::find()
        .filter(user::Column::Id.is_in(student_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let submissions = submission::Entity::find()
        .filter(submission::Column::AssignmentId.is_in(assignment_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let attempts = quiz_attempt::Entity::find()
        .filter(quiz_attempt::Column::QuizId.is_in(quiz_ids))
        .all(db)
        .await
        .map_err(db_error)?;

    let mut marks_by_student: HashMap<i64, (i64, u64)> = HashMap::new();
    for s in &submissions {
        let entry = marks_by_student.entry(s.student_id).or_default();
        entry.0 += s.marks.unwrap_or(0) as i64;
        entry.1 += 1;
    }

    let mut scores_by_student: HashMap<i64, (i64, u64)> = HashMap::new();
    for a in &attempts {
        let entry = scores_by_student.entry(a.student_id).or_default();
        entry.0 += a.score as i64;
        entry.1 += 1;
    }

    let payload: Vec<StudentAnalytics> = students
        .into_iter()
        .map(|student| {
            let (total_marks, submissions_count) =
                marks_by_student.get(&student.id).copied().unwrap_or((0, 0));
            let (total_quiz_score, attempts_count) =
                scores_by_student.get(&student.id).copied().unwrap_or((0, 0));
            StudentAnalytics {
                student_id: student.id,
                student_name: student.name,
                student_email: student.email,
                total_marks,
                total_quiz_score,
                submissions_count,
                attempts_count,
            }
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            payload,
            "Analytics retrieved successfully",
        )),
    )
        .into_response())
}
