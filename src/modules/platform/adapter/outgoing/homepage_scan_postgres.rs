use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use tracing::debug;

use crate::modules::platform::application::domain::entities::{MediaCatalog, PlatformSummary};
use crate::modules::platform::application::domain::extractor::aggregate_homepages;
use crate::modules::platform::application::ports::outgoing::{
    PlatformQueryError, PlatformStrategy,
};

#[derive(Debug, FromQueryResult)]
struct HomepageRow {
    homepage: String,
    title_count: i64,
}

fn homepage_sql(catalog: MediaCatalog) -> String {
    format!(
        "SELECT homepage, COUNT(*) AS title_count FROM public.{} \
         WHERE homepage IS NOT NULL AND homepage <> '' GROUP BY homepage",
        catalog.table()
    )
}

/// Reads raw homepages and derives platforms in process, for when the
/// regex query cannot run against the stored data.
#[derive(Clone)]
pub struct HomepageScanPostgres {
    db: Arc<DatabaseConnection>,
}

impl HomepageScanPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlatformStrategy for HomepageScanPostgres {
    fn name(&self) -> &'static str {
        "homepage_scan"
    }

    async fn fetch(
        &self,
        catalog: MediaCatalog,
    ) -> Result<Vec<PlatformSummary>, PlatformQueryError> {
        let stmt = Statement::from_string(DatabaseBackend::Postgres, homepage_sql(catalog));

        let rows = HomepageRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| PlatformQueryError::DatabaseError(e.to_string()))?;

        debug!(catalog = %catalog, homepages = rows.len(), "Scanning homepages");

        Ok(aggregate_homepages(
            rows.into_iter().map(|row| (row.homepage, row.title_count)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DbErr, MockDatabase};
    use std::collections::BTreeMap;

    fn row(homepage: &str, count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("homepage", Value::from(homepage.to_string())),
            ("title_count", Value::from(count)),
        ])
    }

    #[tokio::test]
    async fn test_homepages_are_aggregated_in_process() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("https://www.netflix.com/title/1", 1),
                row(r#"{"url": "https://netflix.com/title/2"}"#, 1),
                row("https://www.imovies.ge/1", 3),
                row("{broken", 9),
                row("https://solo.io", 1),
            ]])
            .into_connection();

        let platforms = HomepageScanPostgres::new(Arc::new(db))
            .fetch(MediaCatalog::Movies)
            .await
            .unwrap();

        let ids: Vec<(&str, i64)> = platforms
            .iter()
            .map(|p| (p.platform_id.as_str(), p.count))
            .collect();
        assert_eq!(ids, vec![("imovies", 3), ("netflix", 2)]);
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation does not exist".to_string())])
            .into_connection();

        let result = HomepageScanPostgres::new(Arc::new(db))
            .fetch(MediaCatalog::TvSeries)
            .await;

        assert!(matches!(result, Err(PlatformQueryError::DatabaseError(_))));
    }
}
