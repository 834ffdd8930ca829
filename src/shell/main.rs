use anyhow::Context;
use tokio::sync::watch;

use serverless_demos::shell::config::{Config, RunMode};
use serverless_demos::shell::state::{AppState, Backends};
use serverless_demos::shell::{http, telemetry, workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    let backends = Backends::from_config(&config).await?;
    let state = AppState::new(&backends, &config);

    match config.run_mode {
        RunMode::Lambda => {
            tracing::info!("serving the router through the Lambda runtime");
            lambda_http::run(http::router(state))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        RunMode::Consumer => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let worker = workers::spawn_queue_drainer(&backends, &config, shutdown_rx);
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
            worker.await?;
        }
        RunMode::Server => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let worker = config
                .consumer_enabled
                .then(|| workers::spawn_queue_drainer(&backends, &config, shutdown_rx));

            let addr = config.bind_address();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            tracing::info!("HTTP endpoint: http://{addr}, GraphQL: http://{addr}/gql");
            axum::serve(listener, http::router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            let _ = shutdown_tx.send(true);
            if let Some(worker) = worker {
                worker.await?;
            }
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
