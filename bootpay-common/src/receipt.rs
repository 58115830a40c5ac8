//! Receipt types returned by `GET /receipt/{receipt_id}`.

use serde::{Deserialize, Serialize};

/// Receipt status for a completed payment.
pub const RECEIPT_STATUS_COMPLETE: i64 = 1;

/// Gateway record of a payment transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: String,
    #[serde(default)]
    pub order_id: String,
    /// Item name shown to the buyer.
    #[serde(default)]
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub tax_free: i64,
    #[serde(default)]
    pub remain_price: i64,
    #[serde(default)]
    pub remain_tax_free: i64,
    #[serde(default)]
    pub cancelled_price: i64,
    #[serde(default)]
    pub cancelled_tax_free: i64,
    #[serde(default)]
    pub receipt_url: String,
    /// Currency unit, e.g. `krw`.
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub pg: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub pg_name: String,
    #[serde(default)]
    pub method_name: String,
    #[serde(default)]
    pub payment_data: PaymentData,
    #[serde(default)]
    pub requested_at: String,
    #[serde(default, alias = "purchase_at")]
    pub purchased_at: String,
    pub status: i64,
    #[serde(default)]
    pub status_en: String,
    #[serde(default)]
    pub status_ko: String,
}

impl Receipt {
    pub fn is_complete(&self) -> bool {
        self.status == RECEIPT_STATUS_COMPLETE
    }
}

/// PG-level detail block nested in a receipt.
///
/// Card fields are absent for non-card methods, so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentData {
    pub card_name: String,
    /// Masked card number.
    pub card_no: String,
    /// Installment months, `00` for a lump sum.
    pub card_quota: String,
    pub card_auth_no: String,
    pub receipt_id: String,
    #[serde(rename = "n")]
    pub item_name: String,
    #[serde(rename = "p")]
    pub price: i64,
    pub tid: String,
    pub pg: String,
    #[serde(rename = "pm")]
    pub method: String,
    #[serde(rename = "pg_a")]
    pub pg_alias: String,
    #[serde(rename = "pm_a")]
    pub method_alias: String,
    #[serde(rename = "o_id")]
    pub order_id: String,
    #[serde(rename = "p_at")]
    pub paid_at: String,
    #[serde(rename = "s")]
    pub status: i64,
    #[serde(rename = "g")]
    pub gateway: i64,
}
