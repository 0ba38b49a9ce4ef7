//! Lab Side Panel - Main Entry Point

use lab_sidepanel::app::application::run_app;
use lab_sidepanel::utils::config_store::load_config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting lab side panel...");

    // Bad configuration stops here, before any window exists
    let config = load_config().inspect_err(|e| tracing::error!("Failed to load config: {e}"))?;
    let panel = config
        .validate()
        .inspect_err(|e| tracing::error!("Invalid config: {e}"))?;

    tracing::info!(preset = %config.panel.preset, "Panel config loaded");

    run_app(config, panel);
    Ok(())
}
