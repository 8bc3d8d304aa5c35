use crate::error::{env_error, AppResult, Error};
use crate::volunteers::models::VolunteerKind;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default timeout for volunteer API requests, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Optional settings file merged over the environment
pub const SETTINGS_PATH: &str = "config/availability.toml";

/// Main configuration structure for the availability tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Opportunity Hack backend API
    pub api_server_url: String,
    /// Hackathon event to report on
    pub event_id: String,
    /// Which volunteer list to fetch
    pub volunteer_type: VolunteerKind,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
}

/// Overrides read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileSettings {
    pub volunteer_type: Option<VolunteerKind>,
    pub request_timeout_secs: Option<u64>,
}

impl FileSettings {
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Config {
    /// Load configuration from environment and settings file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let api_server_url = env::var("API_SERVER_URL").map_err(|_| env_error("API_SERVER_URL"))?;
        let event_id = env::var("EVENT_ID").map_err(|_| env_error("EVENT_ID"))?;

        let volunteer_type = match env::var("VOLUNTEER_TYPE") {
            Ok(kind) => kind.parse::<VolunteerKind>()?,
            Err(_) => VolunteerKind::Mentor,
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(secs) => secs.parse::<u64>().map_err(|_| {
                Error::Environment("Invalid REQUEST_TIMEOUT_SECS format".to_string())
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let mut config = Config {
            api_server_url,
            event_id,
            volunteer_type,
            request_timeout_secs,
        };

        if let Ok(content) = fs::read_to_string(SETTINGS_PATH) {
            config.apply(FileSettings::from_toml_str(&content)?);
        }

        Ok(config)
    }

    /// Merge settings file values over the current ones
    pub fn apply(&mut self, settings: FileSettings) {
        if let Some(kind) = settings.volunteer_type {
            self.volunteer_type = kind;
        }
        if let Some(secs) = settings.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
    }
}
