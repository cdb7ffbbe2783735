// --- Consola de administración de horarios - binario principal ---

use timetable_admin::config::AppConfig;
use timetable_admin::run_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timetable_admin=info,actix_web=info")),
        )
        .init();

    tracing::info!("=== Consola de administración de horarios (API) ===");
    run_server(config).await?;
    Ok(())
}
