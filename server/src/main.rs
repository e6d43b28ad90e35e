use migration::{Migrator, MigratorTrait};
use server_lib::{AppState, build_router};
use tokio::signal;
use tourbot::{config::Config, db, seed};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("Connecting to database...");
    let db = db::init_database(&config.database_url, config.db_max_connections).await?;

    if config.run_migrations {
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
    }

    if config.seed_sample_data {
        info!("Seeding sample data...");
        seed::seed_sample_data(&db).await?;
    }

    let state = AppState {
        db,
        ctx: config.reply_context(),
        map_app_name: config.map_app_name.clone(),
    };
    let app = build_router(state, &config.images_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Listening on http://{} (public base {})",
        addr, config.public_base_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down gracefully...");
}
