use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

use super::admin_query_postgres::model_to_account;
use super::sea_orm_entity::admins::ActiveModel as AdminActiveModel;
use crate::auth::application::domain::entities::AdminAccount;
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError, CreateAdminData,
};

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create_admin(
        &self,
        data: CreateAdminData,
    ) -> Result<AdminAccount, AdminRepositoryError> {
        let active_admin = AdminActiveModel {
            admin_id: NotSet,
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            created_at: NotSet,
        };

        let inserted = active_admin.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return AdminRepositoryError::UsernameTaken;
            }
            AdminRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(model_to_account(inserted))
    }
}
