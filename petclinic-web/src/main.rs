use anyhow::Context;
use petclinic_infra::sqlite::Database;
use petclinic_web::config::Settings;
use petclinic_web::{ApiContext, router, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;
    telemetry::init(&settings.log)?;

    let db = Database::connect(&settings.database.url, settings.database.max_connections)
        .await
        .context("failed to connect to database")?;
    db.migrate().await.context("failed to apply schema")?;
    db.seed_reference_data()
        .await
        .context("failed to seed reference data")?;

    let app = router(ApiContext::from_database(&db)?);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;
    tracing::info!(addr = %listener.local_addr()?, "petclinic listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running server")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
