//! # Response Envelope
//!
//! Every Rapyd response wraps its payload in a status block. `data` is
//! present if and only if the status reports success, so decoding must never
//! assume it is populated.

use crate::error::RapydError;
use serde::Deserialize;

/// Closed success/error vocabulary of the status block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusKind {
    Success,
    Error,
}

/// The status block attached to every response
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub status: StatusKind,
    pub error_code: Option<String>,
    pub message: Option<String>,
    pub response_code: Option<String>,
    pub operation_id: Option<String>,
}

/// Outer wrapper around every Rapyd response body
#[derive(Debug, Clone, Deserialize)]
pub struct Response<T> {
    pub status: Status,
    pub data: Option<T>,
}

impl<T> Response<T> {
    /// Resolve the envelope: the payload on success, `RapydError::Api` built
    /// from the status block on failure. A success envelope with no `data`
    /// is a decoding error.
    pub fn into_result(self) -> Result<T, RapydError> {
        match self.status.status {
            StatusKind::Success => self.data.ok_or_else(|| {
                RapydError::Decode("success envelope is missing the data field".into())
            }),
            StatusKind::Error => Err(RapydError::Api {
                error_code: self.status.error_code.unwrap_or_default(),
                message: self.status.message.unwrap_or_default(),
                response_code: self.status.response_code,
                operation_id: self.status.operation_id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_resolves_to_data() {
        let body = json!({
            "status": {
                "error_code": "",
                "status": "SUCCESS",
                "message": "",
                "response_code": "",
                "operation_id": "f3a0c1ba-0f1c-4e6b-9a2e-5a9a4f2b1c1d"
            },
            "data": { "id": "ewallet_123" }
        });

        let envelope: Response<serde_json::Value> = serde_json::from_value(body).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data["id"], "ewallet_123");
    }

    #[test]
    fn test_error_envelope_without_data_decodes_cleanly() {
        let body = json!({
            "status": {
                "error_code": "UNAUTHORIZED_API_CALL",
                "status": "ERROR",
                "message": "",
                "response_code": "UNAUTHORIZED_API_CALL",
                "operation_id": "207fa228-b2e1-4da7-9b70-9a5f0b4c23a1"
            }
        });

        let envelope: Response<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert!(envelope.data.is_none());

        match envelope.into_result() {
            Err(RapydError::Api {
                error_code,
                response_code,
                ..
            }) => {
                assert_eq!(error_code, "UNAUTHORIZED_API_CALL");
                assert_eq!(response_code.as_deref(), Some("UNAUTHORIZED_API_CALL"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_envelope_missing_data_is_decode_error() {
        let body = json!({
            "status": { "status": "SUCCESS" }
        });

        let envelope: Response<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(RapydError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_status_kind_is_rejected() {
        let body = json!({
            "status": { "status": "PENDING" }
        });
        assert!(serde_json::from_value::<Response<serde_json::Value>>(body).is_err());
    }
}
