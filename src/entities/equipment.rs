use sea_orm::entity::prelude::*;

use crate::models::{Area, Criticality, Status};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub description: String,

    pub area: Area,

    pub bay: String,

    pub status: Status,

    pub criticality: Criticality,

    /// Username of the last editor.
    pub updated_by: Option<String>,

    pub last_comment: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
