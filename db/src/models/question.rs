use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// A multiple-choice question. Always exactly four options; `correct_index`
/// points into them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub quiz_id: i64,

    pub text: String,

    #[sea_orm(column_type = "Json")]
    pub options: QuestionOptions,

    pub correct_index: i32,

    /// Display position within the quiz.
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct QuestionOptions(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id"
    )]
    Quiz,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        quiz_id: i64,
        text: &str,
        options: Vec<String>,
        correct_index: i32,
        order: Option<i32>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let question = ActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(text.to_owned()),
            options: Set(QuestionOptions(options)),
            correct_index: Set(correct_index),
            order: Set(order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        question.insert(db).await
    }

    pub async fn for_quiz(db: &DbConn, quiz_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    /// Loads the owning course via the quiz, for authorization checks on
    /// question mutation.
    pub async fn course(&self, db: &DbConn) -> Result<Option<super::course::Model>, DbErr> {
        let quiz = super::quiz::Entity::find_by_id(self.quiz_id).one(db).await?;
        match quiz {
            Some(quiz) => quiz.course(db).await,
            None => Ok(None),
        }
    }
}
