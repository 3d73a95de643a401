use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,

    /// Owning teacher; the only user allowed to mutate this course and its
    /// dependent content.
    pub teacher_id: i64,

    pub department: String,
    pub semester: String,
    pub is_published: bool,

    #[sea_orm(column_type = "Json")]
    pub tags: Tags,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeacherId",
        to = "super::user::Column::Id"
    )]
    Teacher,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::lecture::Entity")]
    Lectures,

    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,

    #[sea_orm(has_many = "super::quiz::Entity")]
    Quizzes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        teacher_id: i64,
        title: &str,
        description: &str,
        department: Option<String>,
        semester: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            teacher_id: Set(teacher_id),
            department: Set(department.unwrap_or_default()),
            semester: Set(semester.unwrap_or_default()),
            is_published: Set(false),
            tags: Set(Tags(tags.unwrap_or_default())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    /// Course ids owned by the given teacher; the filter set used by all
    /// "my-*" teacher listings.
    pub async fn owned_course_ids(db: &DbConn, teacher_id: i64) -> Result<Vec<i64>, DbErr> {
        let courses = Entity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .all(db)
            .await?;
        Ok(courses.into_iter().map(|c| c.id).collect())
    }

    /// True when the given user owns this course.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.teacher_id == user_id
    }
}
