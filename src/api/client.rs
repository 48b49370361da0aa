use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::domain::VehicleRecord;

use super::error::{ApiError, extract_detail};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the vehicle registry service.
///
/// The base URL is injected at construction so the client can point at any
/// endpoint, real or fake. No auth, no pagination, JSON in and out.
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /vehicles`. A null or empty body counts as an empty registry.
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, ApiError> {
        let url = format!("{}/vehicles", self.base_url);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            log::error!("GET /vehicles returned {status}: {body}");
            return Err(ApiError::Status(extract_detail(&body)));
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Option<Vec<VehicleRecord>> = serde_json::from_str(&body)?;
        Ok(records.unwrap_or_default())
    }

    /// `POST /vehicles` with the create payload (blank optionals omitted).
    pub async fn create_vehicle(&self, payload: &Map<String, Value>) -> Result<(), ApiError> {
        let url = format!("{}/vehicles", self.base_url);
        log::debug!("POST {url}");
        let response = self.client.post(&url).json(payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            log::error!("POST /vehicles returned {status}: {body}");
            return Err(ApiError::Status(extract_detail(&body)));
        }
        Ok(())
    }

    /// `PUT /vehicles/{id}` with the full record, blanks included.
    pub async fn update_vehicle(
        &self,
        id: i64,
        payload: &Map<String, Value>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/vehicles/{id}", self.base_url);
        log::debug!("PUT {url}");
        let response = self.client.put(&url).json(payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            log::error!("PUT /vehicles/{id} returned {status}: {body}");
            return Err(ApiError::Status(extract_detail(&body)));
        }
        Ok(())
    }

    /// `DELETE /vehicles/{id}`.
    pub async fn delete_vehicle(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/vehicles/{id}", self.base_url);
        log::debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            log::error!("DELETE /vehicles/{id} returned {status}: {body}");
            return Err(ApiError::Status(extract_detail(&body)));
        }
        Ok(())
    }
}
