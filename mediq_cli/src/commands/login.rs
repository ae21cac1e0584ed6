use anyhow::Result;
use clap::Args;
use mediq_lib::SessionResolver;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub password: String,
}

pub async fn run(args: &LoginArgs, resolver: &SessionResolver) -> Result<()> {
    let ctx = resolver.login(&args.username, &args.password).await?;
    match ctx.session() {
        Some(token) => {
            println!("{}", token);
            eprintln!("signed in; export MEDIQ_SESSION={} to reuse the session", token);
        }
        None => eprintln!("signed in, but no session token was issued"),
    }
    Ok(())
}
