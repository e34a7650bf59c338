use std::io::Error;
use std::sync::Arc;
use std::time::Duration;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use tokio::main;
use tracing::info;

use memos::application::services::jwt::JwtServiceConfig;
use memos::application::usecases::{
    authenticate_user::AuthenticateUserUseCase, create_memo::CreateMemoUseCase,
    delete_memo::DeleteMemoUseCase, get_memo::GetMemoUseCase, list_memos::ListMemosUseCase,
    update_memo::UpdateMemoUseCase,
};
use memos::config::Config;
use memos::domain::repositories::{MemoRepository, UserRepository};
use memos::infrastructure::repositories::{
    in_memory::{InMemoryMemoRepository, InMemoryUserRepository},
    postgres::{PostgresMemoRepository, PostgresUserRepository},
};
use memos::presentation::http::endpoints::{
    auth::AuthEndpoints, health::HealthEndpoints, memos::MemosEndpoints, root::ApiState,
};
use memos::readiness::RECOMMENDED_ENV_VARS;

#[main]
async fn main() -> Result<(), Error> {
    if std::env::args().any(|arg| arg == "--check-deploy") {
        std::process::exit(run_deploy_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);
    info!(%server_url, "starting server");

    let (user_repo, memo_repo): (Arc<dyn UserRepository>, Arc<dyn MemoRepository>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .connect(database_url)
                    .await
                    .map_err(Error::other)?;
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .map_err(Error::other)?;
                info!("using postgres repositories");
                (
                    PostgresUserRepository::new(pool.clone()),
                    PostgresMemoRepository::new(pool),
                )
            }
            None => {
                info!("DATABASE_URL not set; using in-memory repositories");
                (
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::new(InMemoryMemoRepository::new()),
                )
            }
        };

    let jwt_config = JwtServiceConfig {
        secret: config.secret_key.clone(),
        expiration: Duration::from_secs(config.token_ttl_secs),
    };

    let state = Arc::new(ApiState {
        auth_usecase: Arc::new(AuthenticateUserUseCase::new(
            user_repo.clone(),
            jwt_config.clone(),
        )),
        list_memos_usecase: Arc::new(ListMemosUseCase::new(memo_repo.clone())),
        get_memo_usecase: Arc::new(GetMemoUseCase::new(memo_repo.clone())),
        create_memo_usecase: Arc::new(CreateMemoUseCase::new(memo_repo.clone())),
        update_memo_usecase: Arc::new(UpdateMemoUseCase::new(memo_repo.clone())),
        delete_memo_usecase: Arc::new(DeleteMemoUseCase::new(memo_repo)),
        jwt_config,
    });

    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            AuthEndpoints::new(state.clone()),
            MemosEndpoints::new(state),
        ),
        "Memos API",
        "0.1.0",
    )
    .server(format!("{server_url}/api"));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await
}

/// Deployment configuration validation for the readiness checker. Prints
/// findings to stdout and returns the process exit code.
fn run_deploy_check() -> i32 {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration is invalid: {err}");
            return 1;
        }
    };

    if config.debug {
        eprintln!("MEMOS_DEBUG must be disabled in production");
        return 1;
    }

    for var in RECOMMENDED_ENV_VARS {
        if std::env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
            println!("Recommended security setting {var} is not set");
        }
    }

    println!("Deployment configuration is valid");
    0
}
