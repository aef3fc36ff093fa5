use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-locale overlay. A NULL column means "use the base value".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property_translations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(150))")]
    pub property_id: String,

    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(8))")]
    pub locale: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub description: Option<Json>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub floors: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id",
        on_update = "Cascade"
    )]
    Properties,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
