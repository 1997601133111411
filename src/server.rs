use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    error::{ServiceError, ServiceResult},
    handlers,
    models::Catalog,
    telemetry,
};

/// Process entry point shared by the three binaries.
pub async fn run<C: Catalog>() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::fixed();

    info!("╔══════════════════════════════════════╗");
    info!("║  {:<36}║", C::SERVICE);
    info!("║  {:<36}║", format!("{} static records", C::records().len()));
    info!("╚══════════════════════════════════════╝");

    let addr = config.addr();
    let listener = bind(&addr).await?;
    info!("Listening on http://{}", addr);

    serve(listener, build_router::<C>(), shutdown_signal()).await?;

    info!("{} shut down", C::SERVICE);
    Ok(())
}

/// A bind failure is fatal: `run` returns it and the process exits.
pub async fn bind(addr: &str) -> ServiceResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Single route; anything else falls through to axum's default 404.
pub fn build_router<C: Catalog>() -> Router {
    Router::new()
        .route("/", get(handlers::status::<C>))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> ServiceResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
