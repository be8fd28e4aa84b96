//! Client for the site REST API served under `<origin>/api`.
//!
//! A thin layer over reqwest: four generic verb wrappers (GET/POST/PUT/DELETE)
//! that inject a fresh bearer token per call and normalize failures into a
//! single error type, plus the characters resource service built on top.

mod auth;
mod characters;
mod client;
mod config;
mod errors;
pub mod types;
pub use self::auth::{MemoryTokenStore, StaticToken, TokenProvider};
pub use self::characters::CharactersService;
pub use self::client::{Client, RequestOptions};
pub use self::config::{base_api_url, DEFAULT_ORIGIN};
pub use self::errors::Error;
