use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::question::{self, QuestionOptions};
use db::models::quiz_attempt::{self, AnswerResult};
use db::models::{quiz, user};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

/// Question projection served to students: everything except the answer key.
#[derive(Debug, Serialize)]
pub struct SafeQuestion {
    pub id: i64,
    pub text: String,
    pub options: QuestionOptions,
    pub order: i32,
}

impl From<question::Model> for SafeQuestion {
    fn from(q: question::Model) -> Self {
        Self {
            id: q.id,
            text: q.text,
            options: q.options,
            order: q.order,
        }
    }
}

/// Quiz with full questions, for the owning teacher.
#[derive(Debug, Serialize)]
pub struct QuizForTeacher {
    #[serde(flatten)]
    pub quiz: quiz::Model,
    pub questions: Vec<question::Model>,
}

/// Quiz with the student-safe question projection.
#[derive(Debug, Serialize)]
pub struct QuizForStudent {
    #[serde(flatten)]
    pub quiz: quiz::Model,
    pub questions: Vec<SafeQuestion>,
}

/// One row of the student's `/my-attempts` overview: a published quiz from
/// an enrolled course, flagged with the student's first attempt if any.
#[derive(Debug, Serialize)]
pub struct QuizAttemptSummary {
    #[serde(flatten)]
    pub quiz: quiz::Model,
    pub attempted: bool,
    pub score: Option<i32>,
    pub total: Option<i32>,
    pub attempt_id: Option<i64>,
}

/// Response payload of a scored attempt. The per-question breakdown is
/// computed for the response only and never persisted.
#[derive(Debug, Serialize)]
pub struct AttemptOutcome {
    pub attempt: quiz_attempt::Model,
    pub score: i32,
    pub total_questions: i32,
    pub results: Vec<AnswerResult>,
}

/// Attempt joined with the student's public identity, for teacher review.
#[derive(Debug, Serialize)]
pub struct AttemptWithStudent {
    #[serde(flatten)]
    pub attempt: quiz_attempt::Model,
    pub student_name: String,
    pub student_email: String,
}

impl AttemptWithStudent {
    pub fn from_pair(attempt: quiz_attempt::Model, student: Option<user::Model>) -> Self {
        let (student_name, student_email) = student
            .map(|s| (s.name, s.email))
            .unwrap_or_default();
        Self {
            attempt,
            student_name,
            student_email,
        }
    }
}

/// Loads a quiz or produces the standard `404` response.
pub async fn find_quiz_or_404(
    db: &DatabaseConnection,
    quiz_id: i64,
) -> Result<quiz::Model, Response> {
    match quiz::Entity::find_by_id(quiz_id).one(db).await {
        Ok(Some(quiz)) => Ok(quiz),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Quiz not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}
