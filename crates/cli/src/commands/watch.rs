use super::start_refresh_jobs;
use crate::di::VerifierContext;
use crate::events::LineEventSource;
use crate::output;
use govpl_verifier_application::ports::NavigationEventSource;
use govpl_verifier_application::use_cases::{NavigationOutcome, WarmUpTrigger};
use govpl_verifier_domain::Config;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Reads navigation events from stdin and prints one result per event.
pub async fn run(ctx: &VerifierContext, config: &Config, json: bool) -> anyhow::Result<()> {
    ctx.use_cases.warm_up.execute(WarmUpTrigger::Startup).await;

    let shutdown = CancellationToken::new();
    start_refresh_jobs(ctx, config, &shutdown).await;

    let mut source = LineEventSource::stdin();

    loop {
        let event = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            event = source.next_event() => event,
        };

        let Some(event) = event else {
            info!("Event source closed");
            break;
        };

        let outcome = ctx.use_cases.handle_navigation.execute(event).await;
        print_outcome(&outcome, json)?;
    }

    shutdown.cancel();
    Ok(())
}

fn print_outcome(outcome: &NavigationOutcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        NavigationOutcome::Checked { tab_id, check } => {
            if json {
                let line = serde_json::json!({ "tab_id": tab_id, "check": check });
                println!("{}", serde_json::to_string(&line)?);
            } else {
                println!("{}", output::render_check_line(*tab_id, check));
            }
        }
        NavigationOutcome::WarmedUp(report) => {
            if json {
                let line = serde_json::json!({ "warmed_up": report });
                println!("{}", serde_json::to_string(&line)?);
            } else {
                print!("{}", output::render_report(report));
            }
        }
    }
    Ok(())
}
