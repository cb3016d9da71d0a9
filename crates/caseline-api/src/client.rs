use std::time::Duration;

use tracing::{info, warn};

use caseline_core::models::ClientRecord;
use caseline_core::wire::{FetchAllResponse, UpsertResponse, upsert_body};
use caseline_intake::{SkippedRecord, normalize_all};

use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::ApiError;

/// Result of a fetch-all: the normalized collection plus any rows the
/// intake normalizer had to skip.
#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<ClientRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// HTTP client for the practice-management API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the full client collection and normalize it.
    ///
    /// The caller replaces its roster wholesale with `records`; skipped rows
    /// are reported, not silently dropped.
    pub async fn fetch_all(&self) -> Result<FetchOutcome, ApiError> {
        let url = endpoints::url(&self.base_url, endpoints::FETCH_CLIENTS);
        let resp: FetchAllResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !resp.success {
            let message = resp
                .message
                .unwrap_or_else(|| "fetch failed with no message".to_string());
            return Err(ApiError::Server(message));
        }

        let (records, skipped) = normalize_all(&resp.clients);
        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "fetch returned malformed records");
        }
        info!(count = records.len(), "fetched client collection");
        Ok(FetchOutcome { records, skipped })
    }

    /// Upsert one cleaned client record.
    pub async fn upsert(&self, record: &ClientRecord) -> Result<(), ApiError> {
        let body = upsert_body(record)?;
        let url = endpoints::url(&self.base_url, endpoints::SAVE_CLIENT);
        let resp: UpsertResponse = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !resp.success {
            let message = resp
                .message
                .unwrap_or_else(|| "save failed with no message".to_string());
            return Err(ApiError::Server(message));
        }
        info!(client_id = %record.id, "client record saved");
        Ok(())
    }
}
