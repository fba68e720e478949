//! HTTP implementation of [`ServiceAreaSource`] for the service area API.

mod errors;

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use service_area::source::{ContractorResponse, MultipleRequest, MultipleResponse};
use service_area::{ContractorId, MapError, ServiceArea, ServiceAreaSource};
use tracing::{debug, warn};

pub use errors::ClientError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for `/api/servicearea`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ServiceAreaClient {
    http: Client,
    base_url: String,
}

impl ServiceAreaClient {
    /// Creates a client for the API rooted at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, http)
    }

    /// Uses an already configured `reqwest` client.
    pub fn with_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn contractor_url(&self, contractor_id: ContractorId) -> String {
        format!("{}/api/servicearea/contractor/{}", self.base_url, contractor_id)
    }

    fn multiple_url(&self) -> String {
        format!("{}/api/servicearea/multiple", self.base_url)
    }

    fn get_contractor(
        &self,
        contractor_id: ContractorId,
    ) -> Result<ContractorResponse, ClientError> {
        let url = self.contractor_url(contractor_id);
        debug!("GET {}", url);
        let response = self.http.get(&url).send()?;
        decode(response, &url)
    }

    fn post_multiple(
        &self,
        contractor_ids: &[ContractorId],
    ) -> Result<MultipleResponse, ClientError> {
        let url = self.multiple_url();
        debug!("POST {} ({} contractors)", url, contractor_ids.len());
        let body = MultipleRequest {
            contractor_ids: contractor_ids.to_vec(),
        };
        let response = self.http.post(&url).json(&body).send()?;
        decode(response, &url)
    }
}

fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.json()?)
}

impl ServiceAreaSource for ServiceAreaClient {
    fn fetch_contractor(&self, contractor_id: ContractorId) -> service_area::Result<ServiceArea> {
        let result = self
            .get_contractor(contractor_id)
            .map_err(MapError::from)
            .and_then(ContractorResponse::into_result);

        if let Err(err) = &result {
            warn!("Service area request for contractor {} failed: {}", contractor_id, err);
        }
        result
    }

    fn fetch_contractors(
        &self,
        contractor_ids: &[ContractorId],
    ) -> service_area::Result<Vec<ServiceArea>> {
        let result = self
            .post_multiple(contractor_ids)
            .map_err(MapError::from)
            .and_then(MultipleResponse::into_result);

        if let Err(err) = &result {
            warn!("Service area request for {:?} failed: {}", contractor_ids, err);
        }
        result
    }
}
