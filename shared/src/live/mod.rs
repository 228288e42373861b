//! Live feed protocol
//!
//! Store → Dashboard: [`OrderUpdate`] as a JSON text frame, one per accepted
//! producer event. Dashboard → Store: nothing; inbound frames are ignored.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 推送给 dashboard 的订单状态更新
///
/// `status` is the effective (normalized) status, the same value the registry
/// now holds for the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub order_id: Uuid,
    pub status: String,
    pub source: String,
    /// RFC 3339 UTC, second precision
    pub timestamp: String,
}

impl OrderUpdate {
    /// Build an update stamped with the current time
    pub fn now(order_id: Uuid, status: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            order_id,
            status: status.into(),
            source: source.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let update = OrderUpdate::now(Uuid::new_v4(), "COOKED", "kitchen");
        assert!(update.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&update.timestamp).is_ok());
    }

    #[test]
    fn wire_shape() {
        let id = Uuid::new_v4();
        let update = OrderUpdate::now(id, "cooking", "kitchen");
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert_eq!(obj["orderId"], id.to_string());
        assert_eq!(obj["status"], "cooking");
        assert_eq!(obj["source"], "kitchen");
        assert!(obj.contains_key("timestamp"));
    }
}
