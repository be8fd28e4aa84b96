//! Types exchanged with the `/characters` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character on the site roster.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub race: Option<String>,

    pub class: Option<String>,

    pub level: Option<i64>,

    /// Set by the server on creation.
    pub created_at: Option<DateTime<Utc>>,
}

/// Form payload for creating a character. Optional fields are omitted from
/// the serialized body entirely rather than sent as null.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
}

/// Mutation acknowledgement body, e.g. `{"msg": "Character deleted."}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ack {
    pub msg: String,
}
