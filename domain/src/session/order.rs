//! Order summary value objects
//!
//! Produced by the backend once it prices an order. The client never
//! computes totals itself.

use serde::{Deserialize, Serialize};

/// A single priced line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Menu category (`burger`, `drink`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Order summary attached to a chat reply (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// An order as recorded by the backend, listed in the admin view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(flatten)]
    pub summary: OrderSummary,
    #[serde(default)]
    pub finalized: bool,
    /// Backend conversation the order came from
    #[serde(default)]
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_item_type_field() {
        let item: OrderItem =
            serde_json::from_str(r#"{"name":"Coke","type":"drink","size":"large"}"#).unwrap();
        assert_eq!(item.kind, "drink");
        assert_eq!(item.size.as_deref(), Some("large"));
        assert!(item.price.is_none());
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let json = r#"{
            "order_id": "1",
            "items": [{"name": "Big Mac", "type": "burger", "price": 5.99}],
            "total": 5.99,
            "finalized": true,
            "session_id": "abc"
        }"#;
        let summary: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.order_id, "1");
        assert_eq!(summary.items[0].price, Some(5.99));
        assert_eq!(summary.total, 5.99);
    }

    #[test]
    fn test_record_flattens_summary() {
        let json = r#"[{
            "order_id": "7",
            "items": [],
            "total": 0.0,
            "finalized": true,
            "session_id": "conv-1"
        }]"#;
        let records: Vec<OrderRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].summary.order_id, "7");
        assert!(records[0].finalized);
        assert_eq!(records[0].session_id, "conv-1");
    }
}
