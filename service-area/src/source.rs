//! Where service areas come from, and the JSON envelopes the API wraps them in.

use serde::{Deserialize, Serialize};

use crate::errors::{MapError, Result};
use crate::types::{ContractorId, ServiceArea};

/// Supplies service area records to the map and list components.
pub trait ServiceAreaSource {
    fn fetch_contractor(&self, contractor_id: ContractorId) -> Result<ServiceArea>;

    fn fetch_contractors(&self, contractor_ids: &[ContractorId]) -> Result<Vec<ServiceArea>>;
}

impl<S: ServiceAreaSource + ?Sized> ServiceAreaSource for &S {
    fn fetch_contractor(&self, contractor_id: ContractorId) -> Result<ServiceArea> {
        (**self).fetch_contractor(contractor_id)
    }

    fn fetch_contractors(&self, contractor_ids: &[ContractorId]) -> Result<Vec<ServiceArea>> {
        (**self).fetch_contractors(contractor_ids)
    }
}

/// Body of `GET /api/servicearea/contractor/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorResponse {
    pub success: bool,
    #[serde(default)]
    pub service_area: Option<ServiceArea>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body sent to `POST /api/servicearea/multiple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleRequest {
    pub contractor_ids: Vec<ContractorId>,
}

/// Body of `POST /api/servicearea/multiple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleResponse {
    pub success: bool,
    #[serde(default)]
    pub service_areas: Vec<ServiceArea>,
    #[serde(default)]
    pub message: Option<String>,
}

fn rejection(message: Option<String>) -> MapError {
    MapError::DataFetch(message.unwrap_or_else(|| "the server reported a failure".to_string()))
}

impl ContractorResponse {
    /// `success: false` is a fetch error; a success without a payload is no data.
    pub fn into_result(self) -> Result<ServiceArea> {
        if !self.success {
            return Err(rejection(self.message));
        }
        self.service_area.ok_or(MapError::NoData)
    }
}

impl MultipleResponse {
    pub fn into_result(self) -> Result<Vec<ServiceArea>> {
        if !self.success {
            return Err(rejection(self.message));
        }
        Ok(self.service_areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_is_fetch_error() {
        let response: ContractorResponse = serde_json::from_str(
            r#"{"success": false, "message": "Contractor not found"}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_result(),
            Err(MapError::DataFetch("Contractor not found".to_string()))
        );
    }

    #[test]
    fn test_failure_without_message() {
        let response: MultipleResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();

        assert!(matches!(response.into_result(), Err(MapError::DataFetch(_))));
    }

    #[test]
    fn test_success_without_area_is_no_data() {
        let response: ContractorResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert_eq!(response.into_result(), Err(MapError::NoData));
    }

    #[test]
    fn test_request_uses_camel_case() {
        let body = serde_json::to_string(&MultipleRequest {
            contractor_ids: vec![1, 2],
        })
        .unwrap();

        assert_eq!(body, r#"{"contractorIds":[1,2]}"#);
    }
}
