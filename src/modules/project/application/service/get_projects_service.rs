use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::locale::Locale;

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, locale: Locale) -> Result<Vec<ProjectView>, GetProjectsError> {
        Ok(self.query.list(locale).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{sample_project_view, CountingProjectQuery};

    #[tokio::test]
    async fn test_list_returns_query_rows() {
        let query = CountingProjectQuery::returning(sample_project_view("villa-1"));
        let service = GetProjectsService::new(query);

        let projects = service.execute(Locale::Ka).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "villa-1");
    }

    #[tokio::test]
    async fn test_list_maps_database_error() {
        let service = GetProjectsService::new(CountingProjectQuery::failing());

        let result = service.execute(Locale::En).await;

        assert!(matches!(result, Err(GetProjectsError::QueryFailed(_))));
    }
}
