use characters_api::types::{Ack, Character, NewCharacter};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_characters_full() {
    let json = load_fixture("characters.json");
    let roster: Vec<Character> = serde_json::from_str(&json).unwrap();
    assert_eq!(roster.len(), 2);

    let first = &roster[0];
    assert_eq!(first.id, "64f1c2e5a2b1c90012ab34cd");
    assert_eq!(first.name, "Thalric");
    assert_eq!(first.race.as_deref(), Some("Dwarf"));
    assert_eq!(first.class.as_deref(), Some("Paladin"));
    assert_eq!(first.level, Some(60));
    assert!(first.created_at.is_some());
}

#[test]
fn deserialize_character_minimal() {
    let json = load_fixture("character_minimal.json");
    let roster: Vec<Character> = serde_json::from_str(&json).unwrap();
    assert_eq!(roster.len(), 1);

    let only = &roster[0];
    assert_eq!(only.name, "Rook");
    assert!(only.race.is_none());
    assert!(only.class.is_none());
    assert!(only.level.is_none());
    assert!(only.created_at.is_none());
}

#[test]
fn new_character_omits_unset_fields() {
    let form = NewCharacter {
        name: "X".to_string(),
        ..Default::default()
    };
    let body = serde_json::to_string(&form).unwrap();
    assert_eq!(body, r#"{"name":"X"}"#);
}

#[test]
fn new_character_full_payload() {
    let form = NewCharacter {
        name: "Sylwen".to_string(),
        race: Some("Night Elf".to_string()),
        class: Some("Hunter".to_string()),
        level: Some(52),
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["name"], "Sylwen");
    assert_eq!(value["race"], "Night Elf");
    assert_eq!(value["class"], "Hunter");
    assert_eq!(value["level"], 52);
}

#[test]
fn deserialize_ack() {
    let ack: Ack = serde_json::from_str(r#"{"msg":"Character deleted."}"#).unwrap();
    assert_eq!(ack.msg, "Character deleted.");
}
