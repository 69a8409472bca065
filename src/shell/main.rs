use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use course_registrations::modules::catalog::seed::seed_catalog;
use course_registrations::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use course_registrations::shared::infrastructure::payment_gateway::stub::StubPaymentGateway;
use course_registrations::shell::config::Config;
use course_registrations::shell::http::router;
use course_registrations::shell::state::AppState;
use course_registrations::shell::workers::spawn_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::parse();

    let store = Arc::new(InMemoryEntityStore::new());
    if !config.no_seed {
        seed_catalog(&*store).await.context("seeding catalog")?;
    }
    let gateway = Arc::new(StubPaymentGateway::new(
        config.tokenize_latency(),
        config.payment_latency(),
    ));

    let state = AppState::new(
        store,
        gateway,
        config.payment_timeout(),
        config.pending_ttl(),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = spawn_sweeper(
        state.sweep_handler.clone(),
        config.sweep_interval(),
        shutdown_rx,
    );

    let app = router(state);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("serving on http://{addr} (GraphQL at /gql)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "could not listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    shutdown_tx.send(true).ok();
    sweeper.await.ok();
    tracing::info!("shut down");
    Ok(())
}
