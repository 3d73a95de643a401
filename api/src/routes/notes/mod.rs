//! Note routes.
//!
//! Course-scoped notes live under `/api/courses/{course_id}/notes` (see
//! `course_notes_routes`); the `/api/notes` group carries the cross-course
//! student listing.

use crate::auth::guards::{allow_authenticated, allow_student, allow_teacher};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post},
};
use delete::delete_note;
use get::{get_course_notes, get_my_notes};
use post::create_note;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/notes` route group.
///
/// - `GET /notes/my-notes` → notes across the student's enrolled courses
pub fn notes_routes() -> Router<AppState> {
    Router::new().route(
        "/my-notes",
        get(get_my_notes).route_layer(from_fn(allow_student)),
    )
}

/// Builds the note routes nested under `/courses/{course_id}/notes`.
///
/// - `GET    /`          → notes of the course (authenticated)
/// - `POST   /`          → create a note (owning teacher)
/// - `DELETE /{note_id}` → delete a note (owning teacher)
pub fn course_notes_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_course_notes).route_layer(from_fn(allow_authenticated)),
        )
        .route("/", post(create_note).route_layer(from_fn(allow_teacher)))
        .route(
            "/{note_id}",
            delete(delete_note).route_layer(from_fn(allow_teacher)),
        )
}
