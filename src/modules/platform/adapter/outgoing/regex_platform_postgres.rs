use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;

use crate::modules::platform::application::domain::entities::{MediaCatalog, PlatformSummary};
use crate::modules::platform::application::domain::extractor::MAX_PLATFORMS;
use crate::modules::platform::application::ports::outgoing::{
    PlatformQueryError, PlatformStrategy,
};

#[derive(Debug, FromQueryResult)]
struct PlatformRow {
    platform_id: String,
    platform_name: String,
    title_count: i64,
}

/// Host extraction and suffix stripping done entirely in PostgreSQL, case
/// insensitive like `extract_platform_id`. Homepages stored as JSON text are
/// read through their `url` member.
fn platform_sql(catalog: MediaCatalog) -> String {
    format!(
        r#"
SELECT
    LOWER(stem) AS platform_id,
    MIN(stem) AS platform_name,
    COUNT(*) AS title_count
FROM (
    SELECT REGEXP_REPLACE(
        REGEXP_REPLACE(homepage_url, '^https?://(www\.)?([^/?#]+).*$', '\2', 'i'),
        '\.com$|\.ge$|\.net$|\.org$|\.io$',
        '',
        'i'
    ) AS stem
    FROM (
        SELECT CASE
            WHEN homepage ~* '^https?://' THEN homepage
            WHEN homepage ~* '^\{{.*"url"\s*:\s*"https?://.*\}}$' THEN homepage::json->>'url'
            ELSE NULL
        END AS homepage_url
        FROM public.{table}
        WHERE homepage IS NOT NULL AND homepage <> ''
    ) AS filtered_homepages
    WHERE homepage_url IS NOT NULL
) AS stems
GROUP BY LOWER(stem)
HAVING COUNT(*) > 1
ORDER BY title_count DESC
LIMIT {limit}
"#,
        table = catalog.table(),
        limit = MAX_PLATFORMS,
    )
}

#[derive(Clone)]
pub struct RegexPlatformPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegexPlatformPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlatformStrategy for RegexPlatformPostgres {
    fn name(&self) -> &'static str {
        "database_regex"
    }

    async fn fetch(
        &self,
        catalog: MediaCatalog,
    ) -> Result<Vec<PlatformSummary>, PlatformQueryError> {
        let stmt = Statement::from_string(DatabaseBackend::Postgres, platform_sql(catalog));

        let rows = PlatformRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| PlatformQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PlatformSummary::new(row.platform_id, row.platform_name, row.title_count))
            .collect())
    }
}
