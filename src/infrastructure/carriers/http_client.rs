//! # HTTP Client Utilities
//!
//! Shared HTTP client for carrier adapters.
//!
//! Wraps `reqwest` with per-client timeout configuration and maps transport
//! and status failures onto [`CarrierError`]. The response body is always
//! read as text before JSON decoding so that vendor fault documents and
//! undecodable payloads survive into the error for diagnostics.
//!
//! # Examples
//!
//! ```ignore
//! use multiship::infrastructure::carriers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let rates: RateResponse = client.get("https://api.example.com/rates").await?;
//! ```

use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for carrier adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Internal`] if the client cannot be built.
    pub fn new(timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CarrierError::internal(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, timeout_ms })
    }

    /// Creates a client with default headers sent on every request.
    ///
    /// Carrier APIs usually authenticate with static headers (API keys,
    /// site ids), which belong here rather than on each call.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Internal`] if the client cannot be built.
    pub fn with_headers(
        timeout_ms: u64,
        default_headers: reqwest::header::HeaderMap,
    ) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| CarrierError::internal(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Timeout`] or [`CarrierError::Connection`] on
    /// transport failure, [`CarrierError::Vendor`] on a non-success status,
    /// and [`CarrierError::Protocol`] if the body cannot be decoded.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> CarrierResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;
        Self::handle_response(response).await
    }

    /// Makes a GET request with query parameters and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> CarrierResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;
        Self::handle_response(response).await
    }

    /// Makes a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> CarrierResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;
        Self::handle_response(response).await
    }

    /// Makes a POST request with a raw text body and returns the raw
    /// response text.
    ///
    /// SOAP-style carrier endpoints take prebuilt XML envelopes and answer
    /// with XML the adapter parses itself.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Timeout`] or [`CarrierError::Connection`] on
    /// transport failure and [`CarrierError::Vendor`] on a non-success
    /// status.
    pub async fn post_raw(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> CarrierResult<String> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CarrierError::protocol(format!("failed to read response body: {e}")))?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(Self::status_error(status, text))
        }
    }

    /// Reads the body, checks the status, and decodes JSON.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> CarrierResult<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CarrierError::protocol(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(Self::status_error(status, text));
        }

        serde_json::from_str(&text)
            .map_err(|e| CarrierError::protocol_with_body(format!("invalid JSON: {e}"), text))
    }

    /// Maps a non-success status to a carrier error, keeping the body.
    fn status_error(status: StatusCode, body: String) -> CarrierError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CarrierError::authentication(format!("carrier returned {status}"))
            }
            s => CarrierError::vendor(vec![format!("carrier returned {s}")], body),
        }
    }

    /// Maps a reqwest transport error to a carrier error.
    fn map_reqwest_error(&self, error: &reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::timeout_with_duration(error.to_string(), self.timeout_ms)
        } else if error.is_connect() {
            CarrierError::connection(error.to_string())
        } else {
            CarrierError::connection(format!("request failed: {error}"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Pong {
        ok: bool,
    }

    #[tokio::test]
    async fn get_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok": true}"#))
            .mount(&server)
            .await;

        let client = HttpClient::new(2000).unwrap();
        let pong: Pong = client.get(&format!("{}/ping", server.uri())).await.unwrap();
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn non_success_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rates"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<fault>boom</fault>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(2000).unwrap();
        let err = client
            .get::<Pong>(&format!("{}/rates", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.raw_body(), Some("<fault>boom</fault>"));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rates"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = HttpClient::new(2000).unwrap();
        let err = client
            .get::<Pong>(&format!("{}/rates", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, CarrierError::Authentication { .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpClient::new(2000).unwrap();
        let err = client
            .get::<Pong>(&format!("{}/ping", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, CarrierError::Protocol { .. }));
        assert_eq!(err.raw_body(), Some("not json"));
    }

    #[tokio::test]
    async fn post_raw_round_trips_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/soap"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<env/>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(2000).unwrap();
        let body = client
            .post_raw(
                &format!("{}/soap", server.uri()),
                "text/xml",
                "<request/>".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(body, "<env/>");
    }
}
