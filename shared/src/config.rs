use std::env;

use crate::error::LeadError;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_SHEETS_URL: &str = "https://sheets.googleapis.com";

/// OAuth client credentials plus the Google endpoints to talk to. Read from
/// the environment once at startup and passed into the handler; the endpoint
/// URLs carry production defaults and exist as fields so tests can point the
/// client at a local server.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub token_url: String,
    pub sheets_url: String,
}

impl GoogleConfig {
    pub fn from_env() -> Result<Self, LeadError> {
        Ok(Self {
            client_id: require("GOOGLE_CLIENT_ID")?,
            client_secret: require("GOOGLE_CLIENT_SECRET")?,
            refresh_token: require("GOOGLE_REFRESH_TOKEN")?,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            sheets_url: GOOGLE_SHEETS_URL.to_string(),
        })
    }
}

fn require(name: &str) -> Result<String, LeadError> {
    env::var(name).map_err(|_| LeadError::Config(format!("{} must be set", name)))
}
