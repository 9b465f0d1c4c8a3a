use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_all,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    // Seeding needs the schema.
    run_migrations(&orm, &config.migrations_dir).await?;

    let report = seed_all(&orm).await?;
    for (table, outcome) in &report.steps {
        tracing::info!(table, %outcome, "seed result");
    }
    tracing::info!(inserted = report.inserted(), "seed completed");
    Ok(())
}
