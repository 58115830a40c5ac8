//! Bootpay REST client.
//!
//! Issues access tokens, verifies receipts against an expected price and
//! cancels payments.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod test_util;

pub use bootpay_common::{
    AccessToken, CancelResult, Envelope, PaymentData, Receipt, RECEIPT_STATUS_COMPLETE,
};
pub use client::GatewayClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use gateway::PaymentGateway;
