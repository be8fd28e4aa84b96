use anyhow::Result;
use characters_api::types::NewCharacter;
use characters_api::{CharactersService, Client};
use clap::Args;

use crate::output::{print_characters_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AddArgs {
    /// Character name
    #[arg(long)]
    pub name: String,

    /// Race (e.g. Dwarf, Night Elf)
    #[arg(long)]
    pub race: Option<String>,

    /// Class (e.g. Paladin, Hunter)
    #[arg(long)]
    pub class: Option<String>,

    /// Level
    #[arg(long)]
    pub level: Option<i64>,
}

pub async fn run(args: &AddArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let form = NewCharacter {
        name: args.name.clone(),
        race: args.race.clone(),
        class: args.class.clone(),
        level: args.level,
    };

    let created = CharactersService::new(client).add(&form).await?;
    match format {
        OutputFormat::Table => print_characters_table(std::slice::from_ref(&created)),
        OutputFormat::Json => print_json(&created)?,
    }
    Ok(())
}
