//! Postal code lookup
//!
//! Resolves a complete CEP against the ViaCEP HTTP API. The session
//! layer treats every failure here as non-fatal: an unresolved code
//! just leaves the address fields for the operator to fill in.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use shared::ResolvedAddress;
use thiserror::Error;

use crate::core::Config;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid postal code: {0}")]
    InvalidPostalCode(String),
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Resolves postal codes into addresses.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// `Ok(None)` means the code is well-formed but unknown.
    async fn resolve(&self, cep: &str) -> LookupResult<Option<ResolvedAddress>>;
}

/// One entry of the ViaCEP JSON payload. Unknown codes answer
/// `{"erro": true}` with every other field absent.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// HTTP client for the ViaCEP API.
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> LookupResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> LookupResult<Self> {
        Self::new(
            config.cep_api_url.clone(),
            Duration::from_millis(config.lookup_timeout_ms),
        )
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn resolve(&self, cep: &str) -> LookupResult<Option<ResolvedAddress>> {
        // ViaCEP answers HTTP 400 for malformed codes; reject locally
        // instead of issuing a request that cannot succeed.
        if cep.len() != 8 || !cep.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::InvalidPostalCode(cep.to_string()));
        }

        let url = format!("{}/ws/{}/json/", self.base_url.trim_end_matches('/'), cep);
        let response: ViaCepResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.erro {
            return Ok(None);
        }

        Ok(Some(ResolvedAddress {
            street: response.logradouro,
            neighborhood: response.bairro,
            city: response.localidade,
            region: response.uf,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_code_rejected_locally() {
        let client = ViaCepClient::new("http://localhost:1", Duration::from_millis(100)).unwrap();

        let err = client.resolve("0925104").await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidPostalCode(_)));

        let err = client.resolve("09251-04").await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidPostalCode(_)));
    }

    #[test]
    fn test_error_payload_maps_to_none() {
        let parsed: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(parsed.erro);
        assert!(parsed.logradouro.is_empty());
    }

    #[test]
    fn test_address_payload_parses() {
        let parsed: ViaCepResponse = serde_json::from_str(
            r#"{
                "cep": "09251-040",
                "logradouro": "Avenida Araucária",
                "complemento": "",
                "bairro": "Parque Novo Oratório",
                "localidade": "Santo André",
                "uf": "SP",
                "ibge": "3547809"
            }"#,
        )
        .unwrap();

        assert!(!parsed.erro);
        assert_eq!(parsed.logradouro, "Avenida Araucária");
        assert_eq!(parsed.localidade, "Santo André");
        assert_eq!(parsed.uf, "SP");
    }
}
