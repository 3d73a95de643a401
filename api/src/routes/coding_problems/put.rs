use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::coding_problems::common::find_problem_or_404;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::coding_problem::{self, Difficulty, SampleCase, SampleList};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditProblemRequest {
    pub title: Option<String>,
    pub statement: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub input_description: Option<String>,
    pub output_description: Option<String>,
    pub constraints: Option<String>,
    pub samples: Option<Vec<SampleCase>>,
}

/// PUT /coding-problems/{problem_id}
///
/// Partially updates a coding problem. Ownership is enforced only when the
/// problem is attached to a course.
///
/// ### Responses
/// - `200 OK` → the updated problem
/// - `403 Forbidden` → attached course not owned
/// - `404 Not Found` → problem missing
pub async fn edit_problem(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(problem_id): Path<i64>,
    Json(req): Json<EditProblemRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let problem = find_problem_or_404(db, problem_id).await?;

    if let Some(course_id) = problem.course_id {
        let course = find_course_or_404(db, course_id).await?;
        require_course_owner(&course, claims.sub)?;
    }

    let mut active: coding_problem::ActiveModel = problem.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(statement) = req.statement {
        active.statement = Set(statement);
    }
    if let Some(difficulty) = req.difficulty {
        active.difficulty = Set(difficulty);
    }
    if let Some(input_description) = req.input_description {
        active.input_description = Set(input_description);
    }
    if let Some(output_description) = req.output_description {
        active.output_description = Set(output_description);
    }
    if let Some(constraints) = req.constraints {
        active.constraints = Set(constraints);
    }
    if let Some(samples) = req.samples {
        active.samples = Set(SampleList(samples));
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            updated,
            "Coding problem updated successfully",
        )),
    )
        .into_response())
}
