use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,

    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub max_marks: i32,

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

    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
        max_marks: Option<i32>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let assignment = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            due_date: Set(due_date),
            max_marks: Set(max_marks.unwrap_or(100)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        assignment.insert(db).await
    }

    /// Loads this assignment's owning course for authorization checks.
    pub async fn course(&self, db: &DbConn) -> Result<Option<super::course::Model>, DbErr> {
        super::course::Entity::find_by_id(self.course_id).one(db).await
    }
}
