use league_server::config::Config;
use league_server::server::{create_player_route, telemetry};
use league_server::store::FileSystemPlayerStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    telemetry::init_telemetry(&config).await?;

    let store = match FileSystemPlayerStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            error!(path = %config.db_path.display(), error = %e, "Problem creating player store");
            return Err(e.into());
        }
    };

    let app = create_player_route(Arc::new(store));
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "League server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("League server stopped");
    telemetry::shutdown_telemetry(&config);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "Failed to listen for shutdown signal");
    }
}
