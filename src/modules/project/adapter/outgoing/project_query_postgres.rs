// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::warn;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::shared::locale::Locale;

// Translatable columns come from the overlay when present, everything else
// from the base row.
const MERGED_SELECT: &str = r#"
SELECT
    p.id,
    COALESCE(pt.title, p.title) AS title,
    COALESCE(pt.short_description, p.short_description) AS short_description,
    p.location,
    p.function,
    p.area,
    p.year,
    COALESCE(pt.description, p.description) AS description,
    COALESCE(pt.floors, p.floors) AS floors,
    p.images,
    p.thumbnail
FROM properties p
LEFT JOIN property_translations pt
    ON p.id = pt.property_id AND pt.locale = $1
"#;

#[derive(Debug, FromQueryResult)]
struct MergedProjectRow {
    id: String,
    title: String,
    short_description: Option<String>,
    location: Option<String>,
    function: Option<String>,
    area: Option<String>,
    year: Option<String>,
    description: Option<JsonValue>,
    floors: Option<JsonValue>,
    images: Option<JsonValue>,
    thumbnail: Option<String>,
}

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get(&self, id: &str, locale: Locale) -> Result<ProjectView, ProjectQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("{} WHERE p.id = $2", MERGED_SELECT),
            [locale.as_str().into(), id.into()],
        );

        let row = MergedProjectRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        Ok(row_to_view(row))
    }

    async fn list(&self, locale: Locale) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("{} ORDER BY p.created_at DESC", MERGED_SELECT),
            [locale.as_str().into()],
        );

        let rows = MergedProjectRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(row_to_view).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn row_to_view(row: MergedProjectRow) -> ProjectView {
    ProjectView {
        description: array_or_empty(&row.id, "description", row.description),
        floors: array_or_empty(&row.id, "floors", row.floors),
        images: array_or_empty(&row.id, "images", row.images),
        id: row.id,
        title: row.title,
        short_description: row.short_description,
        location: row.location,
        function: row.function,
        area: row.area,
        year: row.year,
        thumbnail: row.thumbnail,
    }
}

/// JSON columns that are not arrays (or do not decode) are exposed as `[]`.
fn array_or_empty<T: DeserializeOwned>(id: &str, column: &str, value: Option<JsonValue>) -> Vec<T> {
    match value {
        Some(v @ JsonValue::Array(_)) => serde_json::from_value(v).unwrap_or_else(|e| {
            warn!(project_id = %id, column, error = %e, "Undecodable JSON array column");
            Vec::new()
        }),
        _ => Vec::new(),
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
