use crate::di::VerifierContext;
use crate::output;

pub async fn run(ctx: &VerifierContext, json: bool) -> anyhow::Result<()> {
    let snapshots = ctx.use_cases.cache_info.execute().await;

    if json {
        return output::print_json(&snapshots);
    }

    for snapshot in &snapshots {
        print!("{}", output::render_cache_info(snapshot));
    }
    Ok(())
}
