use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One completed attempt at a quiz. Students may attempt the same quiz any
/// number of times; every attempt inserts a fresh row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub quiz_id: i64,
    pub student_id: i64,

    #[sea_orm(column_type = "Json")]
    pub answers: AnswerList,

    /// Count of correctly answered questions.
    pub score: i32,
    /// Number of questions the quiz had when the attempt was scored.
    pub total: i32,

    pub attempted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AnswerList(pub Vec<AttemptAnswer>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptAnswer {
    pub question_id: i64,
    pub selected_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id"
    )]
    Quiz,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Per-question outcome included in the attempt response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub question_id: i64,
    pub selected_index: i32,
    pub correct_index: i32,
    pub is_correct: bool,
}

/// Scores a set of submitted answers against the quiz's questions.
///
/// An answer counts toward the score only when its question id matches a
/// question of this quiz and the selected index equals that question's
/// correct index. Unknown question ids and unanswered questions contribute
/// nothing; they are not errors.
pub fn score_answers(
    questions: &[super::question::Model],
    answers: &[AttemptAnswer],
) -> (i32, Vec<AnswerResult>) {
    let mut score = 0;
    let mut results = Vec::with_capacity(answers.len());

    for answer in answers {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            continue;
        };
        let is_correct = answer.selected_index == question.correct_index;
        if is_correct {
            score += 1;
        }
        results.push(AnswerResult {
            question_id: answer.question_id,
            selected_index: answer.selected_index,
            correct_index: question.correct_index,
            is_correct,
        });
    }

    (score, results)
}

impl Model {
    pub async fn create(
        db: &DbConn,
        quiz_id: i64,
        student_id: i64,
        answers: Vec<AttemptAnswer>,
        score: i32,
        total: i32,
    ) -> Result<Model, DbErr> {
        let attempt = ActiveModel {
            quiz_id: Set(quiz_id),
            student_id: Set(student_id),
            answers: Set(AnswerList(answers)),
            score: Set(score),
            total: Set(total),
            attempted_at: Set(Utc::now()),
            ..Default::default()
        };

        attempt.insert(db).await
    }

    pub async fn for_student(
        db: &DbConn,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Model as Question, QuestionOptions};
    use chrono::Utc;

    fn question(id: i64, correct_index: i32) -> Question {
        let now = Utc::now();
        Question {
            id,
            quiz_id: 1,
            text: format!("Question {id}"),
            options: QuestionOptions(vec![
                "A".into(),
                "B".into(),
                "C".into(),
                "D".into(),
            ]),
            correct_index,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn scores_correct_answers_only() {
        let questions = vec![question(1, 0), question(2, 3), question(3, 1)];
        let answers = vec![
            AttemptAnswer { question_id: 1, selected_index: 0 },
            AttemptAnswer { question_id: 2, selected_index: 2 },
            AttemptAnswer { question_id: 3, selected_index: 1 },
        ];

        let (score, results) = score_answers(&questions, &answers);
        assert_eq!(score, 2);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_correct);
        assert!(!results[1].is_correct);
        assert!(results[2].is_correct);
    }

    #[test]
    fn ignores_unknown_question_ids() {
        let questions = vec![question(1, 0)];
        let answers = vec![
            AttemptAnswer { question_id: 999, selected_index: 0 },
            AttemptAnswer { question_id: 1, selected_index: 0 },
        ];

        let (score, results) = score_answers(&questions, &answers);
        assert_eq!(score, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question_id, 1);
    }

    #[test]
    fn omitted_questions_score_zero() {
        let questions = vec![question(1, 0), question(2, 1)];
        let answers = vec![AttemptAnswer { question_id: 2, selected_index: 1 }];

        let (score, results) = score_answers(&questions, &answers);
        assert_eq!(score, 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_answers_score_zero() {
        let questions = vec![question(1, 0)];
        let (score, results) = score_answers(&questions, &[]);
        assert_eq!(score, 0);
        assert!(results.is_empty());
    }
}
