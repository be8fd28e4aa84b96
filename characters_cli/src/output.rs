use anyhow::Result;
use characters_api::types::Character;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct CharacterRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Race")]
    #[serde(rename = "Race")]
    race: String,
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    class: String,
    #[tabled(rename = "Level")]
    #[serde(rename = "Level")]
    level: String,
    #[tabled(rename = "Added")]
    #[serde(rename = "Added")]
    added: String,
}

fn build_character_rows(characters: &[Character]) -> Vec<CharacterRow> {
    characters.iter().map(character_row).collect()
}

fn character_row(character: &Character) -> CharacterRow {
    CharacterRow {
        name: character.name.clone(),
        race: character.race.clone().unwrap_or_else(|| "-".to_string()),
        class: character.class.clone().unwrap_or_else(|| "-".to_string()),
        level: character
            .level
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string()),
        added: character
            .created_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string()),
    }
}

pub fn print_characters_table(characters: &[Character]) {
    println!("{}", Table::new(build_character_rows(characters)));
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
