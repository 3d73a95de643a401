use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,

    pub title: String,
    pub description: String,
    pub video_url: String,
    /// HTML lecture notes, rendered client-side.
    pub notes: String,

    #[sea_orm(column_type = "Json")]
    pub resources: Resources,

    /// Display position; not enforced unique.
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Resources(pub Vec<ResourceLink>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        description: Option<String>,
        video_url: Option<String>,
        notes: Option<String>,
        resources: Option<Vec<ResourceLink>>,
        order: Option<i32>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let lecture = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            description: Set(description.unwrap_or_default()),
            video_url: Set(video_url.unwrap_or_default()),
            notes: Set(notes.unwrap_or_default()),
            resources: Set(Resources(resources.unwrap_or_default())),
            order: Set(order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        lecture.insert(db).await
    }

    pub async fn for_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }
}
