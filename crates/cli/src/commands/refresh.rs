use crate::di::VerifierContext;
use crate::output;
use clap::ValueEnum;
use govpl_verifier_application::use_cases::RefreshReport;
use govpl_verifier_domain::ListKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RefreshTarget {
    Official,
    Malicious,
    All,
}

impl RefreshTarget {
    fn kind(self) -> Option<ListKind> {
        match self {
            RefreshTarget::Official => Some(ListKind::Official),
            RefreshTarget::Malicious => Some(ListKind::Malicious),
            RefreshTarget::All => None,
        }
    }
}

/// Forces a download of the selected lists. Fails when any selected list
/// could not be refreshed.
pub async fn run(ctx: &VerifierContext, target: RefreshTarget, json: bool) -> anyhow::Result<()> {
    let succeeded = match target.kind() {
        Some(kind) => {
            let ok = ctx.use_cases.refresh.execute(kind).await;
            if json {
                output::print_json(&serde_json::json!({ "list": kind, "refreshed": ok }))?;
            } else {
                println!("{} list: {}", kind, if ok { "refreshed" } else { "FAILED" });
            }
            ok
        }
        None => {
            let report: RefreshReport = ctx.use_cases.refresh.execute_all().await;
            if json {
                output::print_json(&report)?;
            } else {
                print!("{}", output::render_report(&report));
            }
            report.all_succeeded()
        }
    };

    if !succeeded {
        anyhow::bail!("list refresh failed");
    }
    Ok(())
}
