pub mod check;
pub mod info;
pub mod refresh;
pub mod serve;
pub mod watch;

use crate::di::VerifierContext;
use govpl_verifier_domain::Config;
use govpl_verifier_jobs::{JobRunner, ListRefreshJob};
use tokio_util::sync::CancellationToken;

/// Starts the periodic refresh of both lists, stopped by `shutdown`.
pub(crate) async fn start_refresh_jobs(
    ctx: &VerifierContext,
    config: &Config,
    shutdown: &CancellationToken,
) {
    JobRunner::new()
        .with_official_refresh(
            ListRefreshJob::new(ctx.repos.official.clone())
                .with_interval(config.lists.official.refresh_interval_secs),
        )
        .with_malicious_refresh(
            ListRefreshJob::new(ctx.repos.malicious.clone())
                .with_interval(config.lists.malicious.refresh_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;
}
