//! Lecture routes for `/api/lectures`.
//!
//! - `post.rs` — create lecture
//! - `get.rs` — course listing and single lecture
//! - `put.rs` — partial lecture edits
//! - `delete.rs` — delete lecture

use crate::auth::guards::allow_teacher;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_lecture;
use get::{get_lecture, get_lectures_by_course};
use post::create_lecture;
use put::edit_lecture;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/lectures` route group.
///
/// Routes:
/// - `POST   /lectures`                     → create lecture (owning teacher)
/// - `GET    /lectures/course/{course_id}`  → lectures of a course, ordered (public)
/// - `GET    /lectures/{lecture_id}`        → single lecture (public)
/// - `PUT    /lectures/{lecture_id}`        → edit lecture (owning teacher)
/// - `DELETE /lectures/{lecture_id}`        → delete lecture (owning teacher)
pub fn lectures_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_lecture).route_layer(from_fn(allow_teacher)))
        .route("/course/{course_id}", get(get_lectures_by_course))
        .route("/{lecture_id}", get(get_lecture))
        .route(
            "/{lecture_id}",
            put(edit_lecture).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lecture_id}",
            delete(delete_lecture).route_layer(from_fn(allow_teacher)),
        )
}
