use super::start_refresh_jobs;
use crate::di::VerifierContext;
use govpl_verifier_application::use_cases::WarmUpTrigger;
use govpl_verifier_domain::Config;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Warms both lists, then keeps them fresh in the background until Ctrl-C.
pub async fn run(ctx: &VerifierContext, config: &Config) -> anyhow::Result<()> {
    let report = ctx.use_cases.warm_up.execute(WarmUpTrigger::Startup).await;
    if !report.all_succeeded() {
        warn!(
            official = report.official,
            malicious = report.malicious,
            "Starting with incomplete lists"
        );
    }

    for snapshot in ctx.use_cases.cache_info.execute().await {
        info!(
            list = %snapshot.kind,
            count = snapshot.count,
            expired = snapshot.is_expired,
            "List ready"
        );
    }

    let shutdown = CancellationToken::new();
    start_refresh_jobs(ctx, config, &shutdown).await;

    info!("Verifier running, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received, stopping background jobs");
    shutdown.cancel();
    Ok(())
}
