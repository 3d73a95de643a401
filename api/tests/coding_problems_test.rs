mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::coding_problem::{Difficulty, Model as ProblemModel, SampleCase};
use db::models::course::Model as CourseModel;
use helpers::{create_student, create_teacher, make_test_app};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample(input: &str, output: &str) -> SampleCase {
    SampleCase {
        input: input.into(),
        output: output.into(),
        explanation: String::new(),
    }
}

#[tokio::test]
#[serial]
async fn create_standalone_problem() {
    let (app, app_state) = make_test_app().await;
    let (_teacher, token) = create_teacher(app_state.db(), "Prof", "prof@example.com").await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/coding-problems")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "title": "Two Sum",
                "statement": "Find two numbers adding to a target",
                "difficulty": "easy",
                "constraints": "2 <= nums.length <= 10^4",
                "samples": [
                    { "input": "[2,7,11,15], 9", "output": "[0,1]" }
                ]
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Two Sum");
    assert_eq!(
        json["data"]["statement"],
        "Find two numbers adding to a target"
    );
    assert_eq!(json["data"]["difficulty"], "easy");
    assert_eq!(json["data"]["constraints"], "2 <= nums.length <= 10^4");
    assert!(json["data"]["course_id"].is_null());
}

#[tokio::test]
#[serial]
async fn course_problem_requires_ownership() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (owner, _) = create_teacher(db, "Owner", "owner@example.com").await;
    let (_other, other_token) = create_teacher(db, "Other", "other@example.com").await;
    let course = CourseModel::create(db, owner.id, "Course", "desc", None, None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri("/api/coding-problems")
        .header("Authorization", format!("Bearer {other_token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "course_id": course.id,
                "title": "Sneaky",
                "statement": "desc"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn listing_filters_by_difficulty() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;

    ProblemModel::create(
        db,
        None,
        "Easy One",
        "desc",
        Difficulty::Easy,
        None,
        None,
        None,
        vec![],
        teacher.id,
    )
    .await
    .unwrap();
    ProblemModel::create(
        db,
        None,
        "Hard One",
        "desc",
        Difficulty::Hard,
        None,
        None,
        None,
        vec![],
        teacher.id,
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/api/coding-problems?difficulty=hard")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let problems = json["data"].as_array().unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0]["title"], "Hard One");
}

#[tokio::test]
#[serial]
async fn short_solution_fails_evaluation() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let problem = ProblemModel::create(
        db,
        None,
        "Two Sum",
        "desc",
        Difficulty::Easy,
        None,
        None,
        None,
        vec![sample("1", "1"), sample("2", "2")],
        teacher.id,
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/coding-problems/{}/submit", problem.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "code": "   x    " }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Failed");
    assert_eq!(json["data"]["test_cases_passed"], 0);
    assert_eq!(json["data"]["total_test_cases"], 2);
}

#[tokio::test]
#[serial]
async fn missing_code_is_rejected() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let problem = ProblemModel::create(
        db,
        None,
        "Two Sum",
        "desc",
        Difficulty::Easy,
        None,
        None,
        None,
        vec![sample("1", "1")],
        teacher.id,
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/coding-problems/{}/submit", problem.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "code": "" }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Please provide code");
}

#[tokio::test]
#[serial]
async fn long_solution_passes_all_samples() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let problem = ProblemModel::create(
        db,
        None,
        "Two Sum",
        "desc",
        Difficulty::Easy,
        None,
        None,
        None,
        vec![sample("1", "1"), sample("2", "2"), sample("3", "3")],
        teacher.id,
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/coding-problems/{}/submit", problem.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({ "code": "fn main() { println!(\"hello\"); }" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Passed");
    assert_eq!(json["data"]["test_cases_passed"], 3);
    assert_eq!(json["data"]["total_test_cases"], 3);
}

#[tokio::test]
#[serial]
async fn delete_standalone_problem_any_teacher() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (creator, _) = create_teacher(db, "Creator", "creator@example.com").await;
    let (_other, other_token) = create_teacher(db, "Other", "other@example.com").await;
    let problem = ProblemModel::create(
        db,
        None,
        "Orphan",
        "desc",
        Difficulty::Medium,
        None,
        None,
        None,
        vec![],
        creator.id,
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/coding-problems/{}", problem.id))
        .header("Authorization", format!("Bearer {other_token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
