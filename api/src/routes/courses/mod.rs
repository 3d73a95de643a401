//! Course routes for `/api/courses`.
//!
//! - `post.rs` — create course, enroll
//! - `get.rs` — catalogue listings, single course, enrollment status
//! - `put.rs` — partial course edits
//! - `delete.rs` — delete course, unenroll
//! - `common.rs` — shared response DTOs
//!
//! Course notes are nested under `/courses/{course_id}/notes`.

use crate::auth::guards::{allow_authenticated, allow_student, allow_teacher};
use crate::routes::notes::course_notes_routes;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::{delete_course, unenroll};
use get::{enrollment_status, get_course, get_courses, get_enrolled_courses, get_my_courses};
use post::{create, enroll};
use put::edit_course;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`                     → published catalogue (public)
/// - `POST   /courses`                     → create course (teacher)
/// - `GET    /courses/my-courses`          → teacher's own courses
/// - `GET    /courses/enrolled`            → student's enrolled courses
/// - `GET    /courses/{course_id}`         → single course (public)
/// - `PUT    /courses/{course_id}`         → edit course (owning teacher)
/// - `DELETE /courses/{course_id}`         → delete course (owning teacher)
/// - `POST   /courses/{course_id}/enroll`  → enroll (student)
/// - `DELETE /courses/{course_id}/enroll`  → unenroll (student)
/// - `GET    /courses/{course_id}/enrollment-status` → `{is_enrolled}`
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/", post(create).route_layer(from_fn(allow_teacher)))
        .route(
            "/my-courses",
            get(get_my_courses).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/enrolled",
            get(get_enrolled_courses).route_layer(from_fn(allow_student)),
        )
        .route("/{course_id}", get(get_course))
        .route(
            "/{course_id}",
            put(edit_course).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{course_id}",
            delete(delete_course).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{course_id}/enroll",
            post(enroll).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{course_id}/enroll",
            delete(unenroll).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{course_id}/enrollment-status",
            get(enrollment_status).route_layer(from_fn(allow_authenticated)),
        )
        .nest("/{course_id}/notes", course_notes_routes())
}
