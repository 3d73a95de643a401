mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::{
    course::Model as CourseModel, enrollment, question::Model as QuestionModel,
    quiz::Model as QuizModel,
};
use helpers::{create_student, create_teacher, make_test_app};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn publish_quiz(db: &sea_orm::DatabaseConnection, quiz: &QuizModel) {
    let mut active = quiz.clone().into_active_model();
    active.is_published = Set(true);
    active.update(db).await.unwrap();
}

fn options() -> Vec<String> {
    vec!["A".into(), "B".into(), "C".into(), "D".into()]
}

#[tokio::test]
#[serial]
async fn create_question_requires_exactly_four_options() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/quizzes/{}/questions", quiz.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "text": "Pick one",
                "options": ["A", "B"],
                "correct_index": 0
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Exactly 4 options are required");
}

#[tokio::test]
#[serial]
async fn attempt_unpublished_quiz_is_rejected() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Draft", None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/quizzes/{}/attempt", quiz.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "answers": [] }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Cannot attempt an unpublished quiz");
}

#[tokio::test]
#[serial]
async fn attempt_scores_against_answer_key() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    publish_quiz(db, &quiz).await;

    let q1 = QuestionModel::create(db, quiz.id, "Q1", options(), 0, Some(1))
        .await
        .unwrap();
    let q2 = QuestionModel::create(db, quiz.id, "Q2", options(), 2, Some(2))
        .await
        .unwrap();
    let _q3 = QuestionModel::create(db, quiz.id, "Q3", options(), 3, Some(3))
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/quizzes/{}/attempt", quiz.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "answers": [
                    { "question_id": q1.id, "selected_index": 0 },
                    { "question_id": q2.id, "selected_index": 1 }
                ]
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Quiz attempted successfully");
    assert_eq!(json["data"]["score"], 1);
    assert_eq!(json["data"]["total_questions"], 3);

    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["is_correct"], true);
    assert_eq!(results[1]["is_correct"], false);
}

#[tokio::test]
#[serial]
async fn attempt_ignores_unknown_question_ids() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    publish_quiz(db, &quiz).await;
    QuestionModel::create(db, quiz.id, "Q1", options(), 0, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/quizzes/{}/attempt", quiz.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "answers": [{ "question_id": 999999, "selected_index": 0 }]
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 0);
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn repeat_attempts_create_new_rows() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    publish_quiz(db, &quiz).await;
    let q = QuestionModel::create(db, quiz.id, "Q1", options(), 0, None)
        .await
        .unwrap();

    let attempt = || {
        Request::builder()
            .method("POST")
            .uri(format!("/api/quizzes/{}/attempt", quiz.id))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "answers": [{ "question_id": q.id, "selected_index": 0 }]
                })
                .to_string(),
            ))
            .unwrap()
    };

    let response = app.clone().oneshot(attempt()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = app.clone().oneshot(attempt()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/quizzes/{}/attempts", quiz.id))
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn student_quiz_view_hides_answer_key() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, teacher_token) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, student_token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    QuestionModel::create(db, quiz.id, "Q1", options(), 2, None)
        .await
        .unwrap();

    let view = |token: &str| {
        Request::builder()
            .method("GET")
            .uri(format!("/api/quizzes/{}", quiz.id))
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(view(&student_token)).await.unwrap();
    let json = body_json(response).await;
    let question = &json["data"]["questions"][0];
    assert_eq!(question["text"], "Q1");
    assert!(question.get("correct_index").is_none());

    let response = app.oneshot(view(&teacher_token)).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["questions"][0]["correct_index"], 2);
}

#[tokio::test]
#[serial]
async fn course_quiz_listing_shows_published_only() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    let published = QuizModel::create(db, course.id, "Published", None, None)
        .await
        .unwrap();
    publish_quiz(db, &published).await;
    QuizModel::create(db, course.id, "Draft", None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/quizzes/course/{}", course.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let quizzes = json["data"].as_array().unwrap();
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0]["title"], "Published");
}

#[tokio::test]
#[serial]
async fn my_attempts_reports_first_attempt() {
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
    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    publish_quiz(db, &quiz).await;
    let q = QuestionModel::create(db, quiz.id, "Q1", options(), 0, None)
        .await
        .unwrap();

    let attempt = |selected: i32| {
        Request::builder()
            .method("POST")
            .uri(format!("/api/quizzes/{}/attempt", quiz.id))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "answers": [{ "question_id": q.id, "selected_index": selected }]
                })
                .to_string(),
            ))
            .unwrap()
    };

    // First attempt misses, second is perfect; the overview keeps the first.
    app.clone().oneshot(attempt(1)).await.unwrap();
    app.clone().oneshot(attempt(0)).await.unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/api/quizzes/my-attempts")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["attempted"], true);
    assert_eq!(rows[0]["score"], 0);
    assert_eq!(rows[0]["total"], 1);
}
