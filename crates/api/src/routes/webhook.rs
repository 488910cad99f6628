//! Webhook Routes

use axum::body::Bytes;
use tracing::{debug, info};

use alert_log::{log_batch, AlertBatch};

/// Receive an alert notification
///
/// The body is decoded leniently: anything that does not parse as an
/// alert batch is treated as an empty batch so the upstream sender
/// never sees a decode failure.
pub async fn receive(body: Option<Bytes>) -> &'static str {
    let bytes = body.unwrap_or_default();
    let batch = decode_batch(&bytes);

    info!("Received {} alert(s) on webhook", batch.alerts.len());
    log_batch(&batch);

    "Alert received"
}

/// Decode a request body into an alert batch, falling back to an empty
/// batch when the payload is missing or malformed
fn decode_batch(bytes: &[u8]) -> AlertBatch {
    match serde_json::from_slice::<AlertBatch>(bytes) {
        Ok(batch) => batch,
        Err(e) => {
            debug!("Body not decodable as alert batch, using empty batch: {}", e);
            AlertBatch::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_payload() {
        let body = br#"{"alerts": [{"status": "firing"}, {"status": "resolved"}]}"#;
        let batch = decode_batch(body);
        assert_eq!(batch.alerts.len(), 2);
        assert_eq!(batch.alerts[0].status(), "firing");
        assert_eq!(batch.alerts[1].status(), "resolved");
    }

    #[test]
    fn test_decode_invalid_json_is_empty_batch() {
        let batch = decode_batch(b"not json at all {{{");
        assert!(batch.alerts.is_empty());
    }

    #[test]
    fn test_decode_empty_body_is_empty_batch() {
        let batch = decode_batch(b"");
        assert!(batch.alerts.is_empty());
    }

    #[test]
    fn test_decode_non_object_is_empty_batch() {
        let batch = decode_batch(b"[42]");
        assert!(batch.alerts.is_empty());
    }

    #[test]
    fn test_decode_wrongly_typed_alerts_is_empty_batch() {
        let batch = decode_batch(br#"{"alerts": "oops"}"#);
        assert!(batch.alerts.is_empty());
    }
}
