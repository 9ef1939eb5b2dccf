//! # Webhook Envelope
//!
//! Events pushed by Rapyd to a merchant-registered URL. The event type is an
//! open string (Rapyd adds types without notice) and the payload shape
//! depends on it, so `data` stays untyped until the caller names a type.

use crate::error::RapydError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outer wrapper around a webhook delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Event ID, string starting with `wh_`
    pub id: String,

    /// Event type, e.g. `PAYMENT_SUCCEEDED`
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event payload; shape depends on `event_type`
    pub data: serde_json::Value,

    /// ID of the operation that triggered the event
    pub trigger_operation_id: Option<String>,

    pub status: Option<String>,

    /// Unix creation time
    pub created_at: Option<i64>,
}

impl Webhook {
    /// Deserialize the payload into a caller-chosen type
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, RapydError> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| RapydError::Decode(format!("webhook data: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Payment;
    use serde_json::json;

    #[test]
    fn test_payment_webhook_decodes() {
        let body = json!({
            "id": "wh_c5304a1a6d0d9d73bfd440afa6eba1b4",
            "type": "PAYMENT_SUCCEEDED",
            "data": {
                "id": "payment_dcc7df2f5bb913d70d0659b8e67c4638",
                "paid": false,
                "amount": 0,
                "captured": true,
                "created_at": 1658198483,
                "ewallet_id": "ewallet_16a7d52901c805bc41284d0fcf0caa61",
                "country_code": "US",
                "currency_code": "USD",
                "customer_token": "cus_a4117bd598c8050f6da4b278c5f5affc",
                "payment_method": "other_46330fec2963b746f406378601de1ee5",
                "initiation_type": "customer_present",
                "original_amount": 743,
                "refunded_amount": 0,
                "payment_method_type": "us_sameday_ach_bank",
                "merchant_reference_id": "USWNTvsCANADA",
                "payment_method_type_category": "bank_transfer"
            },
            "trigger_operation_id": "64577803-60a0-4c77-92f6-8159d76ba223",
            "status": "RET",
            "created_at": 1658198483
        });

        let webhook: Webhook = serde_json::from_value(body).unwrap();
        assert_eq!(webhook.event_type, "PAYMENT_SUCCEEDED");

        let payment: Payment = webhook.data_as().unwrap();
        assert_eq!(
            payment.id.as_deref(),
            Some("payment_dcc7df2f5bb913d70d0659b8e67c4638")
        );
        assert_eq!(payment.original_amount.unwrap().value(), 743.0);
        assert_eq!(
            payment.merchant_reference_id.as_deref(),
            Some("USWNTvsCANADA")
        );
    }

    #[test]
    fn test_mismatched_payload_is_decode_error() {
        let webhook = Webhook {
            id: "wh_1".into(),
            event_type: "PAYMENT_SUCCEEDED".into(),
            data: json!("not an object"),
            trigger_operation_id: None,
            status: None,
            created_at: None,
        };
        assert!(matches!(
            webhook.data_as::<Payment>(),
            Err(RapydError::Decode(_))
        ));
    }
}
