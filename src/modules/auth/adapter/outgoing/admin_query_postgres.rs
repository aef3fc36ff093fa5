use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::admins::{Column as AdminColumn, Entity as AdminEntity, Model};
use crate::auth::application::domain::entities::AdminAccount;
use crate::auth::application::ports::outgoing::{AdminQuery, AdminQueryError};

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn model_to_account(model: Model) -> AdminAccount {
    AdminAccount {
        admin_id: model.admin_id,
        username: model.username,
        password_hash: model.password_hash,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AdminQueryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(model_to_account))
    }

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminAccount>, AdminQueryError> {
        let admin = AdminEntity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(model_to_account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn admin_model(admin_id: i32, username: &str) -> Model {
        Model {
            admin_id,
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_find_by_username_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(1, "admin")]])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        let admin = query.find_by_username("admin").await.unwrap().unwrap();

        assert_eq!(admin.admin_id, 1);
        assert_eq!(admin.username, "admin");
    }

    #[tokio::test]
    async fn test_find_by_username_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        assert!(query.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(7).await;

        assert!(matches!(result, Err(AdminQueryError::DatabaseError(_))));
    }
}
