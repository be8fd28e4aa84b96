mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use characters_api::{Client, StaticToken, TokenProvider, DEFAULT_ORIGIN};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "characters")]
#[command(about = "Manage the character roster through the site API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the character roster
    List(commands::list::ListArgs),
    /// Add a character
    Add(commands::add::AddArgs),
    /// Delete a character by id
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("characters=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    // API_ORIGIN overrides the hosted origin; ACCESS_TOKEN is the same key
    // the site's auth flow stores the token under.
    let origin = std::env::var("API_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
    let tokens: Arc<dyn TokenProvider> = match std::env::var("ACCESS_TOKEN") {
        Ok(token) if !token.is_empty() => Arc::new(StaticToken::new(token)),
        _ => Arc::new(StaticToken::none()),
    };
    let client = Client::with_origin(&origin, tokens)?;

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Add(args) => commands::add::run(args, &client, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, &client, &format).await?,
    }

    Ok(())
}
