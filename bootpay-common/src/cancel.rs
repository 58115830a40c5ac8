//! Cancellation request and result types.

use serde::{Deserialize, Serialize};

/// Form body for `GET /cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub receipt_id: String,
    /// Name of the operator requesting the cancellation.
    pub name: String,
    pub reason: String,
}

/// Outcome of a cancellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelResult {
    pub receipt_id: String,
    pub request_cancel_price: i64,
    pub remain_price: i64,
    pub remain_tax_free: i64,
    pub cancelled_price: i64,
    pub cancelled_tax_free: i64,
    pub revoked_at: String,
    pub tid: String,
}

impl CancelResult {
    /// True once nothing remains to be refunded.
    pub fn is_fully_cancelled(&self) -> bool {
        self.remain_price == 0 && self.remain_tax_free == 0
    }
}
