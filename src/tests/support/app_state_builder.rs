use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    check_session::ICheckSessionUseCase, login_admin::ILoginAdminUseCase,
    setup_admin::ISetupAdminUseCase,
};
use crate::modules::platform::application::platform_use_cases::PlatformUseCases;
use crate::modules::platform::application::ports::incoming::use_cases::{
    GetPlatformsUseCase, RevalidatePlatformsUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    project: ProjectUseCases,
    platform: PlatformUseCases,
    session_cookie: SessionCookieConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                check_session: Arc::new(StubCheckSessionUseCase),
                setup: Arc::new(StubSetupUseCase),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            platform: PlatformUseCases {
                get: Arc::new(StubGetPlatformsUseCase),
                revalidate: Arc::new(StubRevalidatePlatformsUseCase),
            },
            session_cookie: SessionCookieConfig {
                secure: false,
                max_age_secs: 3600,
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_check_session(
        mut self,
        uc: impl ICheckSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.check_session = Arc::new(uc);
        self
    }

    pub fn with_setup(mut self, uc: impl ISetupAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.setup = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_platforms(
        mut self,
        uc: impl GetPlatformsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.platform.get = Arc::new(uc);
        self
    }

    pub fn with_revalidate_platforms(
        mut self,
        uc: impl RevalidatePlatformsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.platform.revalidate = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            project: self.project,
            platform: self.platform,
            session_cookie: self.session_cookie,
        })
    }
}
