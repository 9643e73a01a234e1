mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match services::equipment::load(config.equipment_file.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "equipment catalog unavailable");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        items = catalog.len(),
        source = %config.equipment_file.as_ref().map_or("built-in".into(), |p| p.display().to_string()),
        "equipment catalog ready"
    );

    let state = state::AppState::new(catalog, config.web_dir.clone());
    let app = routes::app(state);
    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, web_dir = %config.web_dir.display(), "equipment-lab listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
