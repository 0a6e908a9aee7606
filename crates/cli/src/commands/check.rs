use crate::di::VerifierContext;
use crate::output;

pub async fn run(ctx: &VerifierContext, url: &str, json: bool) -> anyhow::Result<()> {
    let check = ctx.use_cases.verify_page.execute(Some(url)).await;

    if json {
        output::print_json(&check)?;
    } else {
        print!("{}", output::render_check(&check));
    }

    Ok(())
}
