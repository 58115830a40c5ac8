use bootpay_common::{
    AccessToken, CancelResult, Envelope, PaymentData, Receipt, ENVELOPE_STATUS_OK,
};

/// Response bodies in the shape the gateway sends them.
pub struct MockGatewayResponse;

impl MockGatewayResponse {
    pub fn success<T>(data: T) -> Envelope<T> {
        Envelope {
            status: ENVELOPE_STATUS_OK,
            code: 0,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn token(token: &str) -> Envelope<AccessToken> {
        Self::success(AccessToken {
            token: token.to_string(),
            server_time: 1_565_067_765_000,
            expired_at: 1_565_069_565_000,
        })
    }

    pub fn receipt(receipt_id: &str, price: i64, status: i64) -> Envelope<Receipt> {
        Self::success(Receipt {
            receipt_id: receipt_id.to_string(),
            order_id: "order-1001".to_string(),
            name: "Test item".to_string(),
            price,
            tax_free: 0,
            remain_price: price,
            remain_tax_free: 0,
            cancelled_price: 0,
            cancelled_tax_free: 0,
            receipt_url: format!("https://app.bootpay.co.kr/bill/{}", receipt_id),
            unit: "krw".to_string(),
            pg: "kcp".to_string(),
            method: "card".to_string(),
            pg_name: "NHN KCP".to_string(),
            method_name: "카드결제".to_string(),
            payment_data: PaymentData {
                card_name: "국민".to_string(),
                card_no: "1234********5678".to_string(),
                card_quota: "00".to_string(),
                receipt_id: receipt_id.to_string(),
                item_name: "Test item".to_string(),
                price,
                pg: "NHN KCP".to_string(),
                method: "카드결제".to_string(),
                pg_alias: "kcp".to_string(),
                method_alias: "card".to_string(),
                order_id: "order-1001".to_string(),
                status,
                ..Default::default()
            },
            requested_at: "2019-08-06 14:02:21".to_string(),
            purchased_at: "2019-08-06 14:02:36".to_string(),
            status,
            status_en: "Complete".to_string(),
            status_ko: "결제완료".to_string(),
        })
    }

    pub fn cancel(receipt_id: &str, cancelled_price: i64) -> Envelope<CancelResult> {
        Self::success(CancelResult {
            receipt_id: receipt_id.to_string(),
            request_cancel_price: cancelled_price,
            remain_price: 0,
            remain_tax_free: 0,
            cancelled_price,
            cancelled_tax_free: 0,
            revoked_at: "2019-08-06 15:11:02".to_string(),
            tid: "T1234".to_string(),
        })
    }

    /// Application-level failure with an empty `data`.
    pub fn rejected(status: i64, code: i64, message: &str) -> serde_json::Value {
        serde_json::json!({
            "status": status,
            "code": code,
            "message": message,
            "data": null
        })
    }
}
