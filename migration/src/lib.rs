pub use sea_orm_migration::prelude::*;

mod m20250110_090000_create_table_admins;
mod m20250110_090100_create_table_properties;
mod m20250110_090200_create_table_property_translations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_090000_create_table_admins::Migration),
            Box::new(m20250110_090100_create_table_properties::Migration),
            Box::new(m20250110_090200_create_table_property_translations::Migration),
        ]
    }
}
