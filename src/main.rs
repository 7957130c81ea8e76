//! Entry point: load config, pick the user store, and run the server.

use blog::config::Config;
use blog::db::{self, MemoryUserRepository, PgUserRepository, UserRepository};
use blog::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repo: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url).await?;
            db::run_migrations(&pool).await?;
            tracing::info!("using postgres user store");
            Arc::new(PgUserRepository::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set; using in-memory user store");
            Arc::new(MemoryUserRepository::new())
        }
    };

    if config.seed_fixtures {
        if repo.count().await? == 0 {
            db::seed_users(&*repo).await?;
            tracing::info!("seeded fixture users");
        } else {
            tracing::warn!("SEED_FIXTURES set but store is not empty; skipping");
        }
    }

    let app = create_app(AppState::new(repo));

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
