use anyhow::Result;
use characters_api::{CharactersService, Client};
use clap::Args;

use crate::output::{print_characters_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ListArgs {}

pub async fn run(_args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let roster = CharactersService::new(client).list().await?;
    match format {
        OutputFormat::Table => print_characters_table(&roster),
        OutputFormat::Json => print_json(&roster)?,
    }
    Ok(())
}
