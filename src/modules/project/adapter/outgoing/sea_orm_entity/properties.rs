use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Base-locale project rows. The primary key is the URL slug.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(150))")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub function: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub area: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub year: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub description: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub floors: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,

    // Both maintained by column defaults and the update trigger
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::property_translations::Entity")]
    PropertyTranslations,
}

impl Related<super::property_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
