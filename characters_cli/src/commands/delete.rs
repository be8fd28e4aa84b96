use anyhow::Result;
use characters_api::{CharactersService, Client};
use clap::Args;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct DeleteArgs {
    /// Identifier of the character to delete
    pub id: String,
}

pub async fn run(args: &DeleteArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let ack = CharactersService::new(client).delete(&args.id).await?;
    match format {
        OutputFormat::Table => println!("{}", ack.msg),
        OutputFormat::Json => print_json(&ack)?,
    }
    Ok(())
}
