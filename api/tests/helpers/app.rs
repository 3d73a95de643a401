use api::auth::generate_jwt;
use api::routes::routes;
use axum::Router;
use db::models::user::{Model as UserModel, Role};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use util::state::AppState;

/// Builds a router over a fresh in-memory database with the schema applied.
///
/// Config values are seeded through the environment before the global config
/// is first touched; individual tests run serially so the shared singleton
/// never sees conflicting values.
pub async fn make_test_app() -> (Router, AppState) {
    unsafe {
        std::env::set_var("DATABASE_PATH", "test.db");
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("JWT_DURATION_MINUTES", "60");
    }

    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    let app = Router::new().nest("/api", routes(app_state.clone()));

    (app, app_state)
}

pub async fn create_teacher(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> (UserModel, String) {
    let user = UserModel::create(db, name, email, "password123", Role::Teacher)
        .await
        .expect("Failed to create teacher");
    let (token, _) = generate_jwt(user.id, user.role);
    (user, token)
}

pub async fn create_student(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> (UserModel, String) {
    let user = UserModel::create(db, name, email, "password123", Role::Student)
        .await
        .expect("Failed to create student");
    let (token, _) = generate_jwt(user.id, user.role);
    (user, token)
}
