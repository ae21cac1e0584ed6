use anyhow::Result;
use mediq_lib::{RequestContext, SessionResolver};

pub async fn run(resolver: &SessionResolver, mut ctx: RequestContext) -> Result<()> {
    resolver.logout(&mut ctx).await?;
    if ctx.session().is_none() {
        println!("signed out");
    } else {
        println!("upstream did not confirm logout; session kept");
    }
    Ok(())
}
