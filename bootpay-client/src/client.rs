//! HTTP client for the Bootpay REST API.

use bootpay_common::{
    AccessToken, CancelRequest, CancelResult, Envelope, Receipt, TokenRequest,
    RECEIPT_STATUS_COMPLETE,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Bootpay gateway client.
///
/// Holds the application credentials and one pooled HTTP client. Every call
/// is a single request/response round trip: nothing is retried and no token
/// is cached. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http_client: Client,
    base_url: Url,
    credentials: TokenRequest,
}

impl GatewayClient {
    /// Client for the live gateway with the default 3 second timeout.
    pub fn new(application_id: impl Into<String>, private_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(application_id, private_key))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(config.base_url));
        }

        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            http_client,
            base_url,
            credentials: TokenRequest {
                application_id: config.application_id,
                private_key: config.private_key,
            },
        })
    }

    pub fn application_id(&self) -> &str {
        &self.credentials.application_id
    }

    /// Request an access token with the stored credentials.
    pub async fn access_token(&self) -> Result<AccessToken> {
        let url = self.endpoint(&["request", "token"]);
        tracing::debug!(
            "Requesting access token from {} for application {}",
            url,
            self.credentials.application_id
        );

        let request = self.http_client.post(url.clone()).form(&self.credentials);
        let envelope: Envelope<AccessToken> = self.call(&url, request).await?;

        if !envelope.is_success() {
            tracing::warn!(
                status = envelope.status,
                code = envelope.code,
                "Access token request rejected: {}",
                envelope.message
            );
            return Err(Error::Auth {
                status: envelope.status,
                code: envelope.code,
                message: envelope.message,
            });
        }

        envelope.data.ok_or_else(|| missing_data(&url))
    }

    /// Look up a receipt and check it was paid in full at `expected_price`.
    ///
    /// The receipt status is checked before the price.
    pub async fn verify_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        expected_price: i64,
    ) -> Result<Receipt> {
        let url = self.endpoint(&["receipt", receipt_id]);
        tracing::debug!("Verifying receipt {} at {}", receipt_id, url);

        let request = self
            .http_client
            .get(url.clone())
            .header(AUTHORIZATION, token);
        let envelope: Envelope<Receipt> = self.call(&url, request).await?;
        if !envelope.is_success() && envelope.data.is_none() {
            tracing::warn!(
                receipt_id,
                status = envelope.status,
                code = envelope.code,
                "Receipt lookup rejected: {}",
                envelope.message
            );
            return Err(Error::Rejected {
                endpoint: url.to_string(),
                status: envelope.status,
                code: envelope.code,
                message: envelope.message,
            });
        }
        let receipt = envelope.data.ok_or_else(|| missing_data(&url))?;

        if !receipt.is_complete() {
            tracing::warn!(
                receipt_id,
                status = receipt.status,
                "Receipt is not complete"
            );
            return Err(Error::UnexpectedStatus {
                expected: RECEIPT_STATUS_COMPLETE,
                actual: receipt.status,
            });
        }

        if receipt.price != expected_price {
            tracing::warn!(
                receipt_id,
                expected = expected_price,
                actual = receipt.price,
                "Receipt price mismatch"
            );
            return Err(Error::PriceMismatch {
                expected: expected_price,
                actual: receipt.price,
            });
        }

        Ok(receipt)
    }

    /// Cancel a completed payment.
    ///
    /// The gateway takes the parameters as a form body on a GET request. Any
    /// HTTP 200 response is returned as decoded, including envelopes whose
    /// status is not 200; callers check `Envelope::is_success`.
    pub async fn cancel_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        name: &str,
        reason: &str,
    ) -> Result<Envelope<CancelResult>> {
        let url = self.endpoint(&["cancel"]);
        tracing::debug!("Cancelling receipt {} at {}", receipt_id, url);

        let form = CancelRequest {
            receipt_id: receipt_id.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        };
        let request = self
            .http_client
            .get(url.clone())
            .header(AUTHORIZATION, token)
            .form(&form);
        let envelope: Envelope<CancelResult> = self.call(&url, request).await?;

        if envelope.is_success() {
            tracing::info!("Receipt {} cancelled", receipt_id);
        } else {
            tracing::warn!(
                receipt_id,
                status = envelope.status,
                code = envelope.code,
                "Cancel returned non-success envelope: {}",
                envelope.message
            );
        }

        Ok(envelope)
    }

    /// Send a request, require HTTP 200 and decode the envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<Envelope<T>> {
        let response = request.send().await.map_err(|source| Error::Transport {
            endpoint: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            tracing::warn!("Bootpay returned {} for {}", status, url);
            return Err(Error::HttpStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|source| Error::Transport {
            endpoint: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            endpoint: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base is rejected in from_config
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn missing_data(url: &Url) -> Error {
    Error::Decode {
        endpoint: url.to_string(),
        reason: "response envelope has no data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> GatewayClient {
        GatewayClient::from_config(ClientConfig::new("app", "key").with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let client = client("https://api.bootpay.co.kr");
        assert_eq!(
            client.endpoint(&["request", "token"]).as_str(),
            "https://api.bootpay.co.kr/request/token"
        );
        assert_eq!(
            client.endpoint(&["cancel"]).as_str(),
            "https://api.bootpay.co.kr/cancel"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_normalization() {
        let client = client("http://localhost:8080/");
        assert_eq!(
            client.endpoint(&["receipt", "abc"]).as_str(),
            "http://localhost:8080/receipt/abc"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("http://localhost:8080/bootpay/");
        assert_eq!(
            client.endpoint(&["cancel"]).as_str(),
            "http://localhost:8080/bootpay/cancel"
        );
    }

    #[test]
    fn test_receipt_id_is_a_single_segment() {
        let client = client("https://api.bootpay.co.kr");
        assert_eq!(
            client.endpoint(&["receipt", "a/b?c"]).as_str(),
            "https://api.bootpay.co.kr/receipt/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GatewayClient::from_config(
            ClientConfig::new("app", "key").with_base_url("not a url"),
        );
        assert!(matches!(result, Err(Error::InvalidBaseUrl(_))));

        let result = GatewayClient::from_config(
            ClientConfig::new("app", "key").with_base_url("mailto:ops@example.com"),
        );
        assert!(matches!(result, Err(Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_debug_does_not_leak_private_key() {
        let client = GatewayClient::new("app-id", "private-key-value").unwrap();
        assert_eq!(client.application_id(), "app-id");
        assert!(!format!("{:?}", client).contains("private-key-value"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<GatewayClient>();
    }
}
