use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create property_translations table (locale overlays)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PropertyTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyTranslations::PropertyId)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PropertyTranslations::Locale)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PropertyTranslations::Title).text())
                    .col(ColumnDef::new(PropertyTranslations::ShortDescription).text())
                    .col(ColumnDef::new(PropertyTranslations::Description).json_binary())
                    .col(ColumnDef::new(PropertyTranslations::Floors).json_binary())
                    .primary_key(
                        Index::create()
                            .name("pk_property_translations")
                            .col(PropertyTranslations::PropertyId)
                            .col(PropertyTranslations::Locale),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_translations_property_id")
                            .from(
                                PropertyTranslations::Table,
                                PropertyTranslations::PropertyId,
                            )
                            .to(Properties::Table, Properties::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PropertyTranslations::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum PropertyTranslations {
    Table,
    PropertyId,
    Locale,
    Title,
    ShortDescription,
    Description,
    Floors,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}
