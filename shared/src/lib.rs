pub mod config;
pub mod error;
pub mod forms;
pub mod google;
pub mod leads;
pub mod responses;

use std::sync::Arc;

use crate::config::GoogleConfig;
use crate::google::GoogleClient;

/// Shared application state
pub struct AppState {
    pub google: GoogleClient,
}

impl AppState {
    pub fn new(config: GoogleConfig, http: reqwest::Client) -> Arc<Self> {
        Arc::new(Self {
            google: GoogleClient::new(config, http),
        })
    }
}
