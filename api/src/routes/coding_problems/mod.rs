//! Coding practice problem routes for `/api/coding-problems`.
//!
//! - `post.rs` — create problems, run the mock evaluator
//! - `get.rs` — filtered listing and single problem
//! - `put.rs` — partial edits
//! - `delete.rs` — delete problem
//! - `common.rs` — evaluator payloads and lookups

use crate::auth::guards::{allow_authenticated, allow_teacher};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_problem;
use get::{get_problem, get_problems};
use post::{create_problem, submit_solution};
use put::edit_problem;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/coding-problems` route group.
///
/// Routes:
/// - `GET    /coding-problems`                      → listing with filters (public)
/// - `POST   /coding-problems`                      → create (teacher)
/// - `GET    /coding-problems/{problem_id}`         → single problem (public)
/// - `PUT    /coding-problems/{problem_id}`         → edit (teacher)
/// - `DELETE /coding-problems/{problem_id}`         → delete (teacher)
/// - `POST   /coding-problems/{problem_id}/submit`  → mock evaluation (authenticated)
pub fn coding_problems_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_problems))
        .route("/", post(create_problem).route_layer(from_fn(allow_teacher)))
        .route("/{problem_id}", get(get_problem))
        .route(
            "/{problem_id}",
            put(edit_problem).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{problem_id}",
            delete(delete_problem).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{problem_id}/submit",
            post(submit_solution).route_layer(from_fn(allow_authenticated)),
        )
}
