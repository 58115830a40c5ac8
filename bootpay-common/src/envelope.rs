//! The `{status, code, message, data}` wrapper around every gateway response.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Envelope status the gateway uses for an accepted request.
pub const ENVELOPE_STATUS_OK: i64 = 200;

/// Top-level response wrapper.
///
/// `status` mirrors an HTTP status, `code` is the gateway's own numeric code
/// (0 on success, negative on failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: i64,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(
        default = "Option::default",
        deserialize_with = "empty_as_none",
        bound(deserialize = "T: DeserializeOwned")
    )]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == ENVELOPE_STATUS_OK
    }
}

/// Failed requests come back with `data` set to `null`, `[]` or `{}`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if empty {
        return Ok(None);
    }
    T::deserialize(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Payload {
        value: i64,
    }

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"status": 200, "code": 0, "message": "", "data": {"value": 7}}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(Payload { value: 7 }));
    }

    #[test]
    fn test_envelope_payload_without_default() {
        fn decode<T: DeserializeOwned>(json: &str) -> Envelope<T> {
            serde_json::from_str(json).unwrap()
        }
        let envelope: Envelope<Payload> = decode(r#"{"status": 401, "code": -3001}"#);
        assert!(envelope.data.is_none());
        let envelope: Envelope<Payload> = decode(r#"{"status": 200, "data": {"value": 1}}"#);
        assert_eq!(envelope.data, Some(Payload { value: 1 }));
    }

    #[test]
    fn test_envelope_missing_data() {
        let json = r#"{"status": 200, "code": 0, "message": ""}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_empty_data_shapes() {
        for data in ["null", "[]", "{}"] {
            let json = format!(
                r#"{{"status": 404, "code": -2004, "message": "not found", "data": {}}}"#,
                data
            );
            let envelope: Envelope<Payload> = serde_json::from_str(&json).unwrap();
            assert!(!envelope.is_success());
            assert_eq!(envelope.code, -2004);
            assert_eq!(envelope.message, "not found");
            assert!(envelope.data.is_none(), "data {} should be empty", data);
        }
    }

    #[test]
    fn test_envelope_malformed_data_is_error() {
        let json = r#"{"status": 200, "data": {"value": "seven"}}"#;
        let result: Result<Envelope<Payload>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_defaults_code_and_message() {
        let json = r#"{"status": 500}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.message, "");
        assert!(!envelope.is_success());
    }
}
