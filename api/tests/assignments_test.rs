mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use db::models::{
    assignment::Model as AssignmentModel, course::Model as CourseModel, enrollment, submission,
};
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

#[tokio::test]
#[serial]
async fn create_assignment_defaults_max_marks() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri("/api/assignments")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "course_id": course.id,
                "title": "Essay",
                "description": "Write 1000 words",
                "due_date": (Utc::now() + Duration::days(7)).to_rfc3339()
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Assignment created successfully");
    assert_eq!(json["data"]["max_marks"], 100);
}

#[tokio::test]
#[serial]
async fn resubmission_keeps_a_single_row() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();

    let submit = |content: &str| {
        Request::builder()
            .method("POST")
            .uri(format!("/api/assignments/{}/submit", assignment.id))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "content": content }).to_string()))
            .unwrap()
    };

    let response = app.clone().oneshot(submit("first draft")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;

    let response = app.oneshot(submit("final draft")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;

    assert_eq!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(second["data"]["content"], "final draft");

    let stored = submission::Model::find_by_pair(db, assignment.id, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.content, "final draft");
}

#[tokio::test]
#[serial]
async fn resubmission_preserves_existing_grade() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();

    let first = submission::Model::upsert(db, assignment.id, student.id, Some("v1".into()), None)
        .await
        .unwrap();
    submission::Model::grade(db, first, Some(80), Some("Good".into()))
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/assignments/{}/submit", assignment.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "content": "v2" }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "v2");
    assert_eq!(json["data"]["marks"], 80);
    assert_eq!(json["data"]["feedback"], "Good");
}

#[tokio::test]
#[serial]
async fn grade_submission_stamps_graded_at() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, _) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    let submission =
        submission::Model::upsert(db, assignment.id, student.id, Some("work".into()), None)
            .await
            .unwrap();

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/api/assignments/submissions/{}/grade", submission.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({ "marks": 92, "feedback": "Excellent" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Submission graded successfully");
    assert_eq!(json["data"]["marks"], 92);
    assert!(json["data"]["graded_at"].as_str().is_some());
}

#[tokio::test]
#[serial]
async fn grade_by_non_owner_is_forbidden() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (owner, _) = create_teacher(db, "Owner", "owner@example.com").await;
    let (_other, other_token) = create_teacher(db, "Other", "other@example.com").await;
    let (student, _) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, owner.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    let submission =
        submission::Model::upsert(db, assignment.id, student.id, Some("work".into()), None)
            .await
            .unwrap();

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/api/assignments/submissions/{}/grade", submission.id))
        .header("Authorization", format!("Bearer {other_token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "marks": 100 }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn my_assignments_includes_own_submission() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    enrollment::Model::create(db, student.id, course.id)
        .await
        .unwrap();
    let submitted = AssignmentModel::create(
        db,
        course.id,
        "Submitted",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    AssignmentModel::create(
        db,
        course.id,
        "Pending",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    submission::Model::upsert(db, submitted.id, student.id, Some("done".into()), None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/api/assignments/my-assignments")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let with_submission = rows
        .iter()
        .find(|r| r["title"] == "Submitted")
        .unwrap();
    assert!(with_submission["submission"].is_object());

    let without_submission = rows.iter().find(|r| r["title"] == "Pending").unwrap();
    assert!(without_submission["submission"].is_null());
}

#[tokio::test]
#[serial]
async fn submissions_listing_is_owner_only() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (owner, owner_token) = create_teacher(db, "Owner", "owner@example.com").await;
    let (_other, other_token) = create_teacher(db, "Other", "other@example.com").await;
    let (student, _) = create_student(db, "Stu Dent", "stu@example.com").await;
    let course = CourseModel::create(db, owner.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    submission::Model::upsert(db, assignment.id, student.id, Some("work".into()), None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/assignments/{}/submissions", assignment.id))
        .header("Authorization", format!("Bearer {other_token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/assignments/{}/submissions", assignment.id))
        .header("Authorization", format!("Bearer {owner_token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_name"], "Stu Dent");
}

#[tokio::test]
#[serial]
async fn submit_to_missing_assignment_is_404() {
    let (app, app_state) = make_test_app().await;
    let (_student, token) = create_student(app_state.db(), "Stu", "stu@example.com").await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/assignments/9999/submit")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "content": "late" }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
