//! Payment gateway abstraction.
//!
//! `PaymentGateway` lets application code hold an `Arc<dyn PaymentGateway>`
//! and swap the live client for a fake in its own tests.

use async_trait::async_trait;
use bootpay_common::{AccessToken, CancelResult, Envelope, Receipt};

use crate::client::GatewayClient;
use crate::error::Result;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Obtain an access token from the application credentials.
    async fn access_token(&self) -> Result<AccessToken>;

    /// Fetch a receipt, requiring it to be complete and priced at `expected_price`.
    async fn verify_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        expected_price: i64,
    ) -> Result<Receipt>;

    /// Cancel a payment. The envelope status is not validated.
    async fn cancel_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        name: &str,
        reason: &str,
    ) -> Result<Envelope<CancelResult>>;
}

#[async_trait]
impl PaymentGateway for GatewayClient {
    async fn access_token(&self) -> Result<AccessToken> {
        GatewayClient::access_token(self).await
    }

    async fn verify_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        expected_price: i64,
    ) -> Result<Receipt> {
        GatewayClient::verify_receipt(self, token, receipt_id, expected_price).await
    }

    async fn cancel_receipt(
        &self,
        token: &str,
        receipt_id: &str,
        name: &str,
        reason: &str,
    ) -> Result<Envelope<CancelResult>> {
        GatewayClient::cancel_receipt(self, token, receipt_id, name, reason).await
    }
}
