use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,

    pub title: String,
    pub description: String,
    /// Minutes; 0 means untimed.
    pub time_limit: i32,
    pub is_published: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(has_many = "super::question::Entity")]
    Questions,

    #[sea_orm(has_many = "super::quiz_attempt::Entity")]
    Attempts,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        description: Option<String>,
        time_limit: Option<i32>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let quiz = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            description: Set(description.unwrap_or_default()),
            time_limit: Set(time_limit.unwrap_or(0)),
            is_published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        quiz.insert(db).await
    }

    /// Loads this quiz's owning course for authorization checks.
    pub async fn course(&self, db: &DbConn) -> Result<Option<super::course::Model>, DbErr> {
        super::course::Entity::find_by_id(self.course_id).one(db).await
    }
}
