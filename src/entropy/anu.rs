//! ANU quantum random number service.
//!
//! Bytes are derived from measurements of quantum vacuum fluctuations.
//! The service answers `GET ?length=N&type=uint8` with a JSON document
//! carrying a `success` flag and a `data` array.

use super::provider::{check_length, EntropyProvider, ProviderError};
use super::SourceInfo;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Maximum block length the service accepts per request.
pub const MAX_REQUEST_LENGTH: usize = 1024;

#[derive(Debug, Deserialize)]
struct AnuPayload {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Vec<u8>,
}

/// Primary physical provider backed by the ANU QRNG API.
pub struct AnuQuantumProvider {
    client: Client,
    endpoint: String,
}

impl AnuQuantumProvider {
    /// Provenance reported for ANU bytes.
    pub const INFO: SourceInfo = SourceInfo {
        name: "ANU Quantum Lab",
        detail: "Quantum vacuum fluctuations",
        is_physical: true,
        is_quantum: true,
    };

    /// Creates a provider calling `endpoint` with a shared client.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl EntropyProvider for AnuQuantumProvider {
    fn info(&self) -> &SourceInfo {
        &Self::INFO
    }

    fn fetch(&mut self, count: usize) -> Result<Vec<u8>, ProviderError> {
        let length = count.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("length", length.as_str()), ("type", "uint8")])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_payload(&body, count)
    }
}

/// Parses an ANU JSON response body into exactly `count` bytes.
pub fn parse_payload(body: &str, count: usize) -> Result<Vec<u8>, ProviderError> {
    let payload: AnuPayload =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    if !payload.success {
        return Err(ProviderError::Rejected);
    }

    check_length(payload.data, count)
}
