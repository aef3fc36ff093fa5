use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{self, NotSet};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    properties, property_translations,
};
use crate::modules::project::application::domain::entities::{
    NewProject, PatchField, ProjectUpdate,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::locale::Locale;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn ensure_exists(
        &self,
        txn: &DatabaseTransaction,
        id: &str,
    ) -> Result<(), ProjectRepositoryError> {
        properties::Entity::find_by_id(id.to_string())
            .one(txn)
            .await
            .map_err(map_db_err)?
            .map(|_| ())
            .ok_or(ProjectRepositoryError::NotFound)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        project: NewProject,
        locale: Locale,
    ) -> Result<(), ProjectRepositoryError> {
        let base = properties::ActiveModel {
            id: Set(project.id.clone()),
            title: Set(project.title.clone()),
            short_description: Set(project.short_description.clone()),
            location: Set(project.location),
            function: Set(project.function),
            area: Set(project.area),
            year: Set(project.year),
            description: Set(to_json(&project.description)?),
            floors: Set(to_json(&project.floors)?),
            images: Set(to_json(&project.images)?),
            thumbnail: Set(project.thumbnail),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        properties::Entity::insert(base)
            .exec_without_returning(&txn)
            .await
            .map_err(map_slug_error)?;

        if !locale.is_base() {
            let translation = property_translations::ActiveModel {
                property_id: Set(project.id),
                locale: Set(locale.as_str().to_string()),
                title: Set(Some(project.title)),
                short_description: Set(project.short_description),
                description: NotSet,
                floors: NotSet,
            };

            property_translations::Entity::insert(translation)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)
    }

    async fn update(
        &self,
        id: &str,
        locale: Locale,
        update: ProjectUpdate,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if update.is_empty() {
            self.ensure_exists(&txn, id).await?;
            return txn.commit().await.map_err(map_db_err);
        }

        let result = properties::Entity::update_many()
            .set(base_changes(&update)?)
            .filter(properties::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(ProjectRepositoryError::NotFound);
        }

        if !locale.is_base() && update.has_translatable() {
            let (translation, columns) = translation_changes(id, locale, &update)?;
            debug!(project_id = %id, locale = %locale, "Upserting project translation");

            property_translations::Entity::insert(translation)
                .on_conflict(
                    OnConflict::columns([
                        property_translations::Column::PropertyId,
                        property_translations::Column::Locale,
                    ])
                    .update_columns(columns)
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        property_translations::Entity::delete_many()
            .filter(property_translations::Column::PropertyId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = properties::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(ProjectRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Base-row UPDATE built from only the present fields.
fn base_changes(update: &ProjectUpdate) -> Result<properties::ActiveModel, ProjectRepositoryError> {
    let mut model = <properties::ActiveModel as Default>::default();

    if let Some(title) = update.title.as_value() {
        model.title = Set(title.trim().to_string());
    }
    model.short_description = nullable_text(&update.short_description);
    model.location = nullable_text(&update.location);
    model.function = nullable_text(&update.function);
    model.area = nullable_text(&update.area);
    model.year = nullable_text(&update.year);
    model.thumbnail = nullable_text(&update.thumbnail);

    if let Some(description) = update.description.as_value() {
        model.description = Set(to_json(description)?);
    }
    if let Some(floors) = update.floors.as_value() {
        model.floors = Set(to_json(floors)?);
    }
    if let Some(images) = update.images.as_value() {
        model.images = Set(to_json(images)?);
    }

    Ok(model)
}

/// Overlay row for `(id, locale)` plus the columns an existing row should
/// take from it. Absent fields stay NULL on insert and untouched on update.
fn translation_changes(
    id: &str,
    locale: Locale,
    update: &ProjectUpdate,
) -> Result<
    (
        property_translations::ActiveModel,
        Vec<property_translations::Column>,
    ),
    ProjectRepositoryError,
> {
    use property_translations::Column;

    let mut model = property_translations::ActiveModel {
        property_id: Set(id.to_string()),
        locale: Set(locale.as_str().to_string()),
        ..Default::default()
    };
    let mut columns = Vec::new();

    if let Some(title) = update.title.as_value() {
        model.title = Set(Some(title.trim().to_string()));
        columns.push(Column::Title);
    }
    if !update.short_description.is_unset() {
        model.short_description = nullable_text(&update.short_description);
        columns.push(Column::ShortDescription);
    }
    if let Some(description) = update.description.as_value() {
        model.description = Set(Some(to_json(description)?));
        columns.push(Column::Description);
    }
    if let Some(floors) = update.floors.as_value() {
        model.floors = Set(Some(to_json(floors)?));
        columns.push(Column::Floors);
    }

    Ok((model, columns))
}

fn nullable_text(field: &PatchField<String>) -> ActiveValue<Option<String>> {
    match field {
        PatchField::Unset => NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v.clone())),
    }
}

fn to_json<T: Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
