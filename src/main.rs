pub mod api;
pub mod config;
pub mod health;
pub mod middleware;
pub mod modules;
pub mod shared;
pub use modules::{auth, platform, project};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, SharedTokenProvider};
use crate::auth::application::use_cases::{
    check_session::CheckSessionUseCase, login_admin::LoginAdminUseCase,
    setup_admin::SetupAdminUseCase,
};
use crate::config::AppConfig;
use crate::platform::adapter::outgoing::{HomepageScanPostgres, RegexPlatformPostgres};
use crate::platform::application::domain::entities::PlatformSource;
use crate::platform::application::platform_use_cases::PlatformUseCases;
use crate::platform::application::ports::outgoing::PlatformStrategy;
use crate::platform::application::service::{
    GetPlatformsService, RankedStrategy, RevalidatePlatformsService,
};
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::shared::api::{custom_json_config, ApiResponse};
use crate::shared::cache::{CacheStore, MemoryCacheStore, RedisCacheStore};

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub platform: PlatformUseCases,
    pub session_cookie: SessionCookieConfig,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(config: &AppConfig) -> anyhow::Result<Arc<DatabaseConnection>> {
    let pool = &config.db_pool;
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(pool.connect_timeout)
        .acquire_timeout(pool.connect_timeout)
        .idle_timeout(pool.idle_timeout)
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(conn))
}

#[cfg(not(tarpaulin_include))]
fn build_cache(config: &AppConfig) -> anyhow::Result<Arc<dyn CacheStore>> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisCacheStore::from_url(url).context("Failed to create Redis pool")?;
            info!("Using Redis cache store");
            Ok(Arc::new(store))
        }
        None => {
            warn!("REDIS_URL not set, using in-process cache store");
            Ok(Arc::new(MemoryCacheStore::new()))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    let db_arc = connect_database(&config).await?;
    let cache = build_cache(&config)?;

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider: SharedTokenProvider = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env()?);
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let admin_repo = AdminRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(
            admin_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        check_session: Arc::new(CheckSessionUseCase::new(admin_query.clone())),
        setup: Arc::new(SetupAdminUseCase::new(
            admin_query,
            admin_repo,
            password_hasher,
            config.admin_setup.clone(),
        )),
    };

    // Projects
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));

    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(
            project_query,
            Arc::clone(&cache),
            config.project_cache_ttl,
        )),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(
            project_repo.clone(),
            Arc::clone(&cache),
        )),
        delete: Arc::new(DeleteProjectService::new(project_repo, Arc::clone(&cache))),
    };

    // Platforms: live strategies in order, static list as the last resort
    let regex_strategy: Arc<dyn PlatformStrategy> =
        Arc::new(RegexPlatformPostgres::new(Arc::clone(&db_arc)));
    let scan_strategy: Arc<dyn PlatformStrategy> =
        Arc::new(HomepageScanPostgres::new(Arc::clone(&db_arc)));
    let strategies: Vec<RankedStrategy> = vec![
        (PlatformSource::Database, regex_strategy),
        (PlatformSource::HomepageScan, scan_strategy),
    ];

    let platform = PlatformUseCases {
        get: Arc::new(GetPlatformsService::new(
            strategies,
            Arc::clone(&cache),
            config.platform_cache_ttl,
        )),
        revalidate: Arc::new(RevalidatePlatformsService::new(Arc::clone(&cache))),
    };

    let state = AppState {
        auth,
        project,
        platform,
        session_cookie: SessionCookieConfig {
            secure: config.cookie_secure,
            max_age_secs: token_provider.session_ttl_secs(),
        },
    };

    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(crate::middleware::request_gate))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&cache)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::to(|| async {
                ApiResponse::not_found("ROUTE_NOT_FOUND", "Route not found")
            }))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::check_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::public_setup_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Platforms
    cfg.service(crate::platform::adapter::incoming::web::routes::get_movie_platforms_handler);
    cfg.service(crate::platform::adapter::incoming::web::routes::get_tv_platforms_handler);
    cfg.service(crate::platform::adapter::incoming::web::routes::revalidate_movie_platforms_handler);
    cfg.service(crate::platform::adapter::incoming::web::routes::revalidate_tv_platforms_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
