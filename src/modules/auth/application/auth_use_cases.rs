use std::sync::Arc;

use crate::auth::application::use_cases::{
    check_session::ICheckSessionUseCase, login_admin::ILoginAdminUseCase,
    setup_admin::ISetupAdminUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub check_session: Arc<dyn ICheckSessionUseCase + Send + Sync>,
    pub setup: Arc<dyn ISetupAdminUseCase + Send + Sync>,
}
