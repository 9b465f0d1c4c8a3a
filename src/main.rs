use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_api::{
    app::build_app,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_all,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    let applied = run_migrations(&orm, &config.migrations_dir).await?;
    tracing::info!(applied, "migrations up to date");

    if config.seed_on_startup {
        seed_all(&orm).await?;
    }

    let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
    let app = build_app(AppState::new(orm, config))?;

    tracing::info!("listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
