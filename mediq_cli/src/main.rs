mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mediq_lib::mediq_api::Client;
use mediq_lib::{ApiConfig, ClinicClient, QueryCache, RequestContext, SessionResolver};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "mediq")]
#[command(about = "Terminal front end for the MediQ clinic API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Session token, as printed by `mediq login`
    #[arg(long, global = true, env = "MEDIQ_SESSION")]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and print a session token
    Login(commands::login::LoginArgs),
    /// Sign out and invalidate the current session
    Logout,
    /// Show the identity behind the current session
    Whoami,
    /// List one page of a collection, or walk all pages with --all
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mediq_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = ApiConfig::from_env()?;
    let api = Client::new(&config)?;
    let ctx = match &cli.session {
        Some(token) => RequestContext::with_session(token.clone()),
        None => RequestContext::anonymous(),
    };
    let resolver = SessionResolver::new(api.clone());
    let client = ClinicClient::new(api, QueryCache::default());

    match &cli.command {
        Commands::Login(args) => commands::login::run(args, &resolver).await?,
        Commands::Logout => commands::logout::run(&resolver, ctx).await?,
        Commands::Whoami => commands::whoami::run(&resolver, &ctx, &format).await?,
        Commands::List(args) => commands::list::run(args, &client, &ctx, &format).await?,
    }

    Ok(())
}
