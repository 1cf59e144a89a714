use anyhow::Result;
use tracing::{error, info};

use runtime_mock::config::RuntimeMockConfig;
use runtime_mock::server::MockRuntimeServer;
use runtime_mock_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = RuntimeMockConfig::default();
    let server = MockRuntimeServer::bind(config.socket_addr()).await?;
    server.serve(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down mock runtime api server"),
        Err(e) => {
            // Without a signal handler the process runs until killed.
            error!(error = %e, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}
