//! Quiz routes for `/api/quizzes`.
//!
//! - `post.rs` — create quiz, add questions, take attempts
//! - `get.rs` — listings, single quiz projections, attempt history
//! - `put.rs` — quiz and question edits
//! - `delete.rs` — delete quiz or question
//! - `common.rs` — projections and joined DTOs

use crate::auth::guards::{allow_authenticated, allow_student, allow_teacher};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::{delete_question, delete_quiz};
use get::{get_attempts, get_my_attempts, get_my_quizzes, get_quiz, get_quizzes_by_course};
use post::{attempt_quiz, create_question, create_quiz};
use put::{edit_question, edit_quiz};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/quizzes` route group.
///
/// Routes:
/// - `POST   /quizzes`                        → create quiz (owning teacher)
/// - `GET    /quizzes/course/{course_id}`     → published quizzes of a course (public)
/// - `GET    /quizzes/my-quizzes`             → quizzes across owned courses
/// - `GET    /quizzes/my-attempts`            → student's quiz/attempt overview
/// - `GET    /quizzes/{quiz_id}`              → quiz with questions (role-projected)
/// - `PUT    /quizzes/{quiz_id}`              → edit quiz (owning teacher)
/// - `DELETE /quizzes/{quiz_id}`              → delete quiz (owning teacher)
/// - `POST   /quizzes/{quiz_id}/questions`    → add question (owning teacher)
/// - `PUT    /quizzes/questions/{question_id}`→ edit question (owning teacher)
/// - `DELETE /quizzes/questions/{question_id}`→ delete question (owning teacher)
/// - `POST   /quizzes/{quiz_id}/attempt`      → scored attempt (student)
/// - `GET    /quizzes/{quiz_id}/attempts`     → attempt history (role-dependent)
pub fn quizzes_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quiz).route_layer(from_fn(allow_teacher)))
        .route("/course/{course_id}", get(get_quizzes_by_course))
        .route(
            "/my-quizzes",
            get(get_my_quizzes).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/my-attempts",
            get(get_my_attempts).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{quiz_id}",
            get(get_quiz).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{quiz_id}",
            put(edit_quiz).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{quiz_id}",
            delete(delete_quiz).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{quiz_id}/questions",
            post(create_question).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/questions/{question_id}",
            put(edit_question).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/questions/{question_id}",
            delete(delete_question).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{quiz_id}/attempt",
            post(attempt_quiz).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{quiz_id}/attempts",
            get(get_attempts).route_layer(from_fn(allow_authenticated)),
        )
}
