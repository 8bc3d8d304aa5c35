use super::models::{Volunteer, VolunteerKind, VolunteerListResponse};
use crate::config::Config;
use crate::error::{api_error, AppResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for the hackathon volunteer list endpoint
#[derive(Debug, Clone)]
pub struct VolunteerClient {
    client: Client,
    base_url: Url,
}

impl VolunteerClient {
    /// Create a client for the API rooted at `api_server_url`
    pub fn new(api_server_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_http_client(client, api_server_url)
    }

    /// Use an already configured HTTP client
    pub fn with_http_client(client: Client, api_server_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(api_server_url)?;
        if base_url.cannot_be_a_base() {
            return Err(api_error(&format!("Not a base URL: {}", api_server_url)));
        }
        Ok(Self { client, base_url })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            &config.api_server_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// URL of `/api/messages/hackathon/{event_id}/{kind}`
    pub fn volunteers_url(&self, event_id: &str, kind: VolunteerKind) -> AppResult<Url> {
        let event_id = event_id.trim();
        if event_id.is_empty() {
            return Err(api_error("Event id must not be empty"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| api_error("API server URL cannot hold a path"))?
            .pop_if_empty()
            .extend(["api", "messages", "hackathon", event_id, kind.as_str()]);
        Ok(url)
    }

    /// Fetch every volunteer of one kind registered for an event
    pub async fn fetch_volunteers(
        &self,
        event_id: &str,
        kind: VolunteerKind,
    ) -> AppResult<Vec<Volunteer>> {
        let url = self.volunteers_url(event_id, kind)?;
        debug!("Fetching {} list from {}", kind, url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(api_error(&format!(
                "Failed to fetch {}s: HTTP {} - {}",
                kind, status, error_body
            )));
        }

        let body = response.text().await?;
        let list: VolunteerListResponse = serde_json::from_str(&body)?;
        info!("Fetched {} {} records for event {}", list.data.len(), kind, event_id);
        Ok(list.data)
    }
}
