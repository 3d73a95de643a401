use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coding_problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Problems may be standalone (None) or attached to a course.
    pub course_id: Option<i64>,

    pub title: String,
    pub statement: String,
    pub difficulty: Difficulty,

    pub input_description: String,
    pub output_description: String,

    #[sea_orm(column_type = "Json")]
    pub samples: SampleList,

    pub constraints: String,

    pub created_by: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "difficulty_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,

    #[sea_orm(string_value = "medium")]
    Medium,

    #[sea_orm(string_value = "hard")]
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SampleList(pub Vec<SampleCase>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    Author,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        course_id: Option<i64>,
        title: &str,
        statement: &str,
        difficulty: Difficulty,
        input_description: Option<String>,
        output_description: Option<String>,
        constraints: Option<String>,
        samples: Vec<SampleCase>,
        created_by: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let problem = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            statement: Set(statement.to_owned()),
            difficulty: Set(difficulty),
            input_description: Set(input_description.unwrap_or_default()),
            output_description: Set(output_description.unwrap_or_default()),
            constraints: Set(constraints.unwrap_or_default()),
            samples: Set(SampleList(samples)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        problem.insert(db).await
    }
}
