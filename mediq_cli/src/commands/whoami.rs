use anyhow::Result;
use mediq_lib::{RequestContext, SessionResolver};

use crate::output::OutputFormat;

pub async fn run(
    resolver: &SessionResolver,
    ctx: &RequestContext,
    format: &OutputFormat,
) -> Result<()> {
    match resolver.resolve_detailed(ctx).await {
        Ok(identity) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&identity)?),
            OutputFormat::Table => {
                let roles = identity
                    .roles
                    .iter()
                    .map(|r| format!("{:?}", r))
                    .collect::<Vec<_>>()
                    .join(",");
                println!("{} (id {}) roles: {}", identity.username, identity.id, roles);
            }
        },
        Err(failure) => anyhow::bail!("not signed in ({:?})", failure),
    }
    Ok(())
}
