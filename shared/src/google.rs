use std::time::{Duration, SystemTime};

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::GoogleConfig;
use crate::error::LeadError;

/// Spreadsheet every lead lands in. Fixed deployment constant, not runtime
/// configuration.
pub const SHEET_ID: &str = "1r4PNxEu-ih_iLgbtE79L5_e9AsoowMWzdmpCBISqPrQ";

/// Tab inside the spreadsheet.
const SHEET_TAB: &str = "Leads";

/// Response from Google's token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Bearer token with its expiry instant.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: SystemTime,
}

impl CachedToken {
    /// Usable with a safety margin, so a token cannot expire mid-append.
    pub fn is_fresh(&self, now: SystemTime) -> bool {
        self.expires_at > now + Duration::from_secs(60)
    }
}

/// Client for the two Google calls a request makes: the refresh-token grant
/// and the Sheets append. Holds a short-lived token cache shared across
/// concurrent requests; a cold or expired cache triggers a fresh grant.
pub struct GoogleClient {
    config: GoogleConfig,
    http: Client,
    cached_token: RwLock<Option<CachedToken>>,
}

impl GoogleClient {
    pub fn new(config: GoogleConfig, http: Client) -> Self {
        Self {
            config,
            http,
            cached_token: RwLock::new(None),
        }
    }

    /// Gets a valid access token, refreshing if necessary.
    pub async fn access_token(&self) -> Result<String, LeadError> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if token.is_fresh(SystemTime::now()) {
                    return Ok(token.token.clone());
                }
            }
        }

        let fresh = self.refresh_access_token().await?;

        {
            let mut cached = self.cached_token.write().await;
            *cached = Some(fresh.clone());
        }

        Ok(fresh.token)
    }

    /// OAuth 2.0 refresh-token grant against the token endpoint.
    async fn refresh_access_token(&self) -> Result<CachedToken, LeadError> {
        let res = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("refresh_token", self.config.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(LeadError::TokenExchange(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = res.json().await?;
        let access_token = match token.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(LeadError::TokenExchange(
                    "no access_token in response".to_string(),
                ))
            }
        };

        Ok(CachedToken {
            token: access_token,
            expires_at: SystemTime::now() + Duration::from_secs(token.expires_in),
        })
    }

    /// Append one row to the "Leads" tab, letting the provider interpret
    /// cell types and always inserting new rows.
    pub async fn append_row(&self, range: &str, row: &[String]) -> Result<(), LeadError> {
        let token = self.access_token().await?;

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}!{}:append",
            self.config.sheets_url, SHEET_ID, SHEET_TAB, range
        );

        let res = self
            .http
            .post(&url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&token)
            .json(&serde_json::json!({ "values": [row] }))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(LeadError::Append(format!("{}: {}", status, body)));
        }

        Ok(())
    }
}
