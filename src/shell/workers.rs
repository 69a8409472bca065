use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::modules::registrations::use_cases::sweep_abandoned::handler::SweepAbandonedHandler;
use crate::shared::infrastructure::entity_store::EntityStore;

/// Runs the abandoned-registration sweep every `interval` until `shutdown`
/// flips to true. A failed pass is logged and retried on the next tick.
pub fn spawn_sweeper<TStore>(
    handler: Arc<SweepAbandonedHandler<TStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    TStore: EntityStore + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        info!(interval_secs = interval.as_secs(), "sweeper started");
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = handler.run_once(Utc::now()).await {
                        error!(error = %e, "sweep failed");
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
        info!("sweeper stopped");
    })
}
