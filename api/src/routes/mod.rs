//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via the appropriate access
//! control middleware. Role gates (`allow_teacher`, `allow_student`,
//! `allow_authenticated`) read the JWT role claim; ownership of a specific
//! course or its content is checked inside handlers.

use crate::routes::{
    announcements::announcements_routes, assignments::assignments_routes, auth::auth_routes,
    coding_problems::coding_problems_routes, courses::courses_routes,
    dashboard::dashboard_routes, health::health_routes, lectures::lectures_routes,
    notes::notes_routes, quizzes::quizzes_routes, teachers::teachers_routes,
};
use axum::Router;
use util::state::AppState;

pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod coding_problems;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod health;
pub mod lectures;
pub mod notes;
pub mod quizzes;
pub mod teachers;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → liveness probe (public).
/// - `/auth` → registration, login, profile management.
/// - `/courses` → course CRUD, enrollment, and nested course notes.
/// - `/notes` → cross-course note listings for students.
/// - `/lectures` → lecture CRUD.
/// - `/assignments` → assignment CRUD, submissions, and grading.
/// - `/quizzes` → quiz/question CRUD and scored attempts.
/// - `/coding-problems` → practice problems and the mock evaluator.
/// - `/announcements` → audience-filtered announcements.
/// - `/dashboard` → role-specific aggregate statistics.
/// - `/teachers` → teacher-facing student listings.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/courses", courses_routes())
        .nest("/notes", notes_routes())
        .nest("/lectures", lectures_routes())
        .nest("/assignments", assignments_routes())
        .nest("/quizzes", quizzes_routes())
        .nest("/coding-problems", coding_problems_routes())
        .nest("/announcements", announcements_routes())
        .nest("/dashboard", dashboard_routes())
        .nest("/teachers", teachers_routes())
        .with_state(app_state)
}
