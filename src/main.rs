use anyhow::Result;
use linklite::application::{ports::util::SlugNormalizer, services::ApplicationServices};
use linklite::config::{AppConfig, StorageBackend};
use linklite::domain::blacklist::{BlacklistedSlugReadRepository, BlacklistedSlugWriteRepository};
use linklite::infrastructure::{
    database,
    repositories::{
        InMemoryBlacklistedSlugRepository, PostgresBlacklistedSlugReadRepository,
        PostgresBlacklistedSlugWriteRepository,
    },
    util::DefaultSlugNormalizer,
};
use linklite::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Repositories = (
    Arc<dyn BlacklistedSlugWriteRepository>,
    Arc<dyn BlacklistedSlugReadRepository>,
);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let normalizer: Arc<dyn SlugNormalizer> = Arc::new(DefaultSlugNormalizer);

    let (write_repo, read_repo) = match config.storage_backend() {
        StorageBackend::Postgres => postgres_repositories(&config, normalizer.as_ref()).await?,
        StorageBackend::Memory => memory_repositories(&config, normalizer.as_ref()),
    };

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, normalizer));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn postgres_repositories(
    config: &AppConfig,
    normalizer: &dyn SlugNormalizer,
) -> Result<Repositories> {
    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let seeded = database::seed_blacklist(&pool, normalizer, config.blacklist_seed()).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded reserved slugs");
    }

    let write_repo: Arc<dyn BlacklistedSlugWriteRepository> =
        Arc::new(PostgresBlacklistedSlugWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn BlacklistedSlugReadRepository> =
        Arc::new(PostgresBlacklistedSlugReadRepository::new(pool));
    Ok((write_repo, read_repo))
}

fn memory_repositories(config: &AppConfig, normalizer: &dyn SlugNormalizer) -> Repositories {
    tracing::warn!("using in-memory storage; blacklist will not survive a restart");

    let repo = Arc::new(InMemoryBlacklistedSlugRepository::seeded(
        normalizer,
        config.blacklist_seed(),
    ));

    let write_repo: Arc<dyn BlacklistedSlugWriteRepository> = repo.clone();
    let read_repo: Arc<dyn BlacklistedSlugReadRepository> = repo;
    (write_repo, read_repo)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
