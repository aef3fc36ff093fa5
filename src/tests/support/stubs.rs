use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::auth::application::domain::entities::{AdminAccount, AdminIdentity};
use crate::auth::application::ports::outgoing::admin_repository::CreateAdminData;
use crate::auth::application::ports::outgoing::{
    AdminQuery, AdminQueryError, AdminRepository, AdminRepositoryError, HashError,
    PasswordHasher, SessionClaims, TokenError, TokenProvider,
};
use crate::auth::application::use_cases::check_session::{CheckSessionError, ICheckSessionUseCase};
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::auth::application::use_cases::setup_admin::{
    ISetupAdminUseCase, SetupAdminError, SetupAdminResponse,
};
use crate::modules::platform::application::domain::entities::{
    static_platforms, MediaCatalog, PlatformListing, PlatformSource,
};
use crate::modules::platform::application::ports::incoming::use_cases::{
    GetPlatformsUseCase, RevalidatePlatformsError, RevalidatePlatformsUseCase, Revalidated,
};
use crate::modules::project::application::domain::entities::{
    Floor, Image, NewProject, ProjectUpdate, ProjectView,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectRequest, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::cache::{CacheError, CacheStore};
use crate::shared::locale::Locale;

//
// ──────────────────────────────────────────────────────────
// Auth fakes
// ──────────────────────────────────────────────────────────
//

pub fn sample_admin_account() -> AdminAccount {
    AdminAccount {
        admin_id: 1,
        username: "admin".to_string(),
        password_hash: "hashed:secret".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[derive(Clone)]
pub struct FakeAdminQuery {
    account: Option<AdminAccount>,
    fail: bool,
}

impl FakeAdminQuery {
    pub fn with(account: AdminAccount) -> Self {
        Self {
            account: Some(account),
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            account: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            account: None,
            fail: true,
        }
    }

    fn lookup(
        &self,
        matches: impl Fn(&AdminAccount) -> bool,
    ) -> Result<Option<AdminAccount>, AdminQueryError> {
        if self.fail {
            return Err(AdminQueryError::DatabaseError("db down".to_string()));
        }
        Ok(self.account.clone().filter(|a| matches(a)))
    }
}

#[async_trait]
impl AdminQuery for FakeAdminQuery {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AdminQueryError> {
        self.lookup(|a| a.username == username)
    }

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminAccount>, AdminQueryError> {
        self.lookup(|a| a.admin_id == admin_id)
    }
}

/// Clones share the record of created admins.
#[derive(Clone, Default)]
pub struct FakeAdminRepository {
    created: Arc<Mutex<Vec<CreateAdminData>>>,
    taken: bool,
}

impl FakeAdminRepository {
    /// Every insert loses the race on the unique username.
    pub fn taken() -> Self {
        Self {
            created: Arc::default(),
            taken: true,
        }
    }

    pub fn created(&self) -> Vec<CreateAdminData> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdminRepository for FakeAdminRepository {
    async fn create_admin(
        &self,
        data: CreateAdminData,
    ) -> Result<AdminAccount, AdminRepositoryError> {
        if self.taken {
            return Err(AdminRepositoryError::UsernameTaken);
        }

        let mut created = self.created.lock().unwrap();
        created.push(data.clone());

        Ok(AdminAccount {
            admin_id: created.len() as i32,
            username: data.username,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        })
    }
}

/// Hashes to `hashed:{password}`; verification answers a fixed verdict.
pub struct FakePasswordHasher {
    verdict: bool,
}

impl FakePasswordHasher {
    pub fn verifying(verdict: bool) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Ok(self.verdict)
    }
}

/// Issues `token-for-{admin_id}`.
#[derive(Default)]
pub struct FakeTokenProvider;

impl TokenProvider for FakeTokenProvider {
    fn issue_session_token(&self, admin: &AdminIdentity) -> Result<String, TokenError> {
        Ok(format!("token-for-{}", admin.admin_id))
    }

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let admin_id = token
            .strip_prefix("token-for-")
            .and_then(|id| id.parse().ok())
            .ok_or(TokenError::MalformedToken)?;

        Ok(SessionClaims {
            sub: admin_id,
            username: "admin".to_string(),
            iss: "fake".to_string(),
            iat: 0,
            nbf: 0,
            exp: i64::MAX,
        })
    }

    fn session_ttl_secs(&self) -> i64 {
        3600
    }
}

//
// ──────────────────────────────────────────────────────────
// Project fakes
// ──────────────────────────────────────────────────────────
//

pub fn sample_project_view(id: &str) -> ProjectView {
    ProjectView {
        id: id.to_string(),
        title: "Villa One".to_string(),
        short_description: Some("Two floors above the river".to_string()),
        location: Some("Tbilisi".to_string()),
        function: Some("Residential".to_string()),
        area: Some("240m2".to_string()),
        year: Some("2023".to_string()),
        description: vec!["First paragraph".to_string()],
        floors: vec![Floor {
            name: "Ground".to_string(),
            image: "/floors/ground.png".to_string(),
            measurements: vec!["Living 40m2".to_string()],
        }],
        images: vec![Image {
            src: "/images/front.jpg".to_string(),
            alt: "Front".to_string(),
        }],
        thumbnail: Some("/images/thumb.jpg".to_string()),
    }
}

/// Clones share the call counter.
#[derive(Clone)]
pub struct CountingProjectQuery {
    result: Result<ProjectView, ProjectQueryError>,
    calls: Arc<AtomicUsize>,
}

impl CountingProjectQuery {
    fn new(result: Result<ProjectView, ProjectQueryError>) -> Self {
        Self {
            result,
            calls: Arc::default(),
        }
    }

    pub fn returning(view: ProjectView) -> Self {
        Self::new(Ok(view))
    }

    pub fn not_found() -> Self {
        Self::new(Err(ProjectQueryError::NotFound))
    }

    pub fn failing() -> Self {
        Self::new(Err(ProjectQueryError::DatabaseError("db down".to_string())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectQuery for CountingProjectQuery {
    async fn get(&self, id: &str, _locale: Locale) -> Result<ProjectView, ProjectQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map(|mut view| {
            view.id = id.to_string();
            view
        })
    }

    async fn list(&self, _locale: Locale) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map(|view| vec![view])
    }
}

#[derive(Debug, Clone)]
pub enum RepositoryCall {
    Create(NewProject, Locale),
    Update(String, Locale, ProjectUpdate),
    Delete(String),
}

/// Records every call; clones share the log.
#[derive(Clone)]
pub struct RecordingProjectRepository {
    error: Option<ProjectRepositoryError>,
    calls: Arc<Mutex<Vec<RepositoryCall>>>,
}

impl RecordingProjectRepository {
    pub fn ok() -> Self {
        Self {
            error: None,
            calls: Arc::default(),
        }
    }

    pub fn failing_with(error: ProjectRepositoryError) -> Self {
        Self {
            error: Some(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), ProjectRepositoryError> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProjectRepository for RecordingProjectRepository {
    async fn create(
        &self,
        project: NewProject,
        locale: Locale,
    ) -> Result<(), ProjectRepositoryError> {
        self.record(RepositoryCall::Create(project, locale))
    }

    async fn update(
        &self,
        id: &str,
        locale: Locale,
        update: ProjectUpdate,
    ) -> Result<(), ProjectRepositoryError> {
        self.record(RepositoryCall::Update(id.to_string(), locale, update))
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        self.record(RepositoryCall::Delete(id.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Cache
// ──────────────────────────────────────────────────────────
//

/// Every operation fails, as with Redis unreachable.
pub struct FailingCacheStore;

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Connection("unreachable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Connection("unreachable".to_string()))
    }

    async fn invalidate(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Connection("unreachable".to_string()))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Err(CacheError::Connection("unreachable".to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Default use case stubs for TestAppStateBuilder
// ──────────────────────────────────────────────────────────
//

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubCheckSessionUseCase;

#[async_trait]
impl ICheckSessionUseCase for StubCheckSessionUseCase {
    async fn execute(&self, _admin_id: i32) -> Result<AdminIdentity, CheckSessionError> {
        Err(CheckSessionError::InvalidSession)
    }
}

pub struct StubSetupUseCase;

#[async_trait]
impl ISetupAdminUseCase for StubSetupUseCase {
    async fn execute(&self) -> Result<SetupAdminResponse, SetupAdminError> {
        Err(SetupAdminError::NotConfigured)
    }
}

pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _locale: Locale) -> Result<Vec<ProjectView>, GetProjectsError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(
        &self,
        _id: &str,
        _locale: Locale,
    ) -> Result<ProjectView, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _request: CreateProjectRequest,
        _locale: Locale,
    ) -> Result<ProjectView, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: &str,
        _locale: Locale,
        _update: ProjectUpdate,
    ) -> Result<(), UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: &str) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

pub struct StubGetPlatformsUseCase;

#[async_trait]
impl GetPlatformsUseCase for StubGetPlatformsUseCase {
    async fn execute(&self, catalog: MediaCatalog) -> PlatformListing {
        PlatformListing {
            platforms: static_platforms(catalog),
            source: PlatformSource::Static,
            notice: None,
        }
    }
}

pub struct StubRevalidatePlatformsUseCase;

#[async_trait]
impl RevalidatePlatformsUseCase for StubRevalidatePlatformsUseCase {
    async fn execute(
        &self,
        _catalog: MediaCatalog,
    ) -> Result<Revalidated, RevalidatePlatformsError> {
        Ok(Revalidated {
            revalidated: true,
            now: 0,
        })
    }
}
