use std::sync::Arc;

use auth::PasswordPolicy;
use auth::TokenCodec;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::domain::auth::resolver::IdentityResolver;
use todo_service::domain::auth::service::AuthService;
use todo_service::domain::task::service::TaskService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::repositories::PostgresTaskRepository;
use todo_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "todo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        password_min_length = config.password.min_length,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_codec),
        PasswordPolicy::new(config.password.min_length),
        Duration::minutes(config.jwt.expiration_minutes),
    ));
    let task_service = Arc::new(TaskService::new(task_repository));
    let identity_resolver = Arc::new(IdentityResolver::new(user_repository, token_codec));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, task_service, identity_resolver);

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
