//! Assignment routes for `/api/assignments`.
//!
//! - `post.rs` — create assignment, submit work
//! - `get.rs` — listings for courses, students, and teachers
//! - `put.rs` — assignment edits and submission grading
//! - `delete.rs` — delete assignment
//! - `common.rs` — joined response DTOs

use crate::auth::guards::{allow_authenticated, allow_student, allow_teacher};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_assignment;
use get::{
    get_assignment, get_assignments_by_course, get_my_assignments, get_my_assignments_teacher,
    get_submissions,
};
use post::{create_assignment, submit_assignment};
use put::{edit_assignment, grade_submission};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/assignments` route group.
///
/// Routes:
/// - `POST   /assignments`                            → create (owning teacher)
/// - `GET    /assignments/course/{course_id}`         → course listing (public)
/// - `GET    /assignments/my-assignments`             → student view with own submissions
/// - `GET    /assignments/my-assignments-teacher`     → assignments across owned courses
/// - `GET    /assignments/{assignment_id}`            → single assignment (authenticated)
/// - `PUT    /assignments/{assignment_id}`            → edit (owning teacher)
/// - `DELETE /assignments/{assignment_id}`            → delete (owning teacher)
/// - `POST   /assignments/{assignment_id}/submit`     → submit/resubmit (student)
/// - `GET    /assignments/{assignment_id}/submissions`→ all submissions (owning teacher)
/// - `PUT    /assignments/submissions/{submission_id}/grade` → grade (owning teacher)
pub fn assignments_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_assignment).route_layer(from_fn(allow_teacher)),
        )
        .route("/course/{course_id}", get(get_assignments_by_course))
        .route(
            "/my-assignments",
            get(get_my_assignments).route_layer(from_fn(allow_student)),
        )
        .route(
            "/my-assignments-teacher",
            get(get_my_assignments_teacher).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{assignment_id}",
            get(get_assignment).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{assignment_id}",
            put(edit_assignment).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{assignment_id}",
            delete(delete_assignment).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{assignment_id}/submit",
            post(submit_assignment).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{assignment_id}/submissions",
            get(get_submissions).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/submissions/{submission_id}/grade",
            put(grade_submission).route_layer(from_fn(allow_teacher)),
        )
}
