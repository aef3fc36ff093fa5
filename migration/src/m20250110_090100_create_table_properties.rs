use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create properties table (base locale rows)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .string_len(150)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).text().not_null())
                    .col(ColumnDef::new(Properties::ShortDescription).text())
                    .col(ColumnDef::new(Properties::Location).text())
                    .col(ColumnDef::new(Properties::Function).text())
                    .col(ColumnDef::new(Properties::Area).text())
                    .col(ColumnDef::new(Properties::Year).text())
                    .col(
                        ColumnDef::new(Properties::Description)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Properties::Floors)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Properties::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Properties::Thumbnail).text())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Case-insensitive id uniqueness ("Villa-A" vs "villa-a")
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_properties_id_lower
                ON properties (lower(id));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_properties_updated_at
                BEFORE UPDATE ON properties
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_properties_updated_at ON properties;
                DROP INDEX IF EXISTS idx_properties_id_lower;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Title,
    ShortDescription,
    Location,
    Function,
    Area,
    Year,
    Description,
    Floors,
    Images,
    Thumbnail,
    CreatedAt,
    UpdatedAt,
}
