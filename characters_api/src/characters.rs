//! Characters resource service.

use crate::types::{Ack, Character, NewCharacter};
use crate::{Client, Error, RequestOptions};

/// Service binding the generic verb wrappers to the `/characters` collection.
///
/// A template for further resources: plain composition over the same four
/// wrappers, no shared base type.
pub struct CharactersService<'a> {
    client: &'a Client,
}

impl<'a> CharactersService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the full character roster.
    pub async fn list(&self) -> Result<Vec<Character>, Error> {
        self.client.get("/characters", &RequestOptions::new()).await
    }

    /// Creates a character from the add-character form payload.
    pub async fn add(&self, form: &NewCharacter) -> Result<Character, Error> {
        self.client
            .post("/characters", form, &RequestOptions::json())
            .await
    }

    /// Deletes a character by identifier. Requires an authenticated caller;
    /// the server enforces this.
    pub async fn delete(&self, character_id: &str) -> Result<Ack, Error> {
        self.client
            .delete(&format!("/characters/{character_id}"), &RequestOptions::new())
            .await
    }
}
