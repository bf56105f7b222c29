use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::InMemoryTaskRepository;
use taskboard_api::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are rendered
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let repository = InMemoryTaskRepository::new();
    let app = taskboard_api::app(config.app, repository);

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting taskboard API"
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Taskboard API shutdown complete");
    Ok(())
}
