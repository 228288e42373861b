//! Request payloads exchanged with customers and the kitchen

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::snapshot::{Order, OrderItem};

/// Body of `POST /order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub order_data: String,
}

/// Body of the kitchen's `POST /cook`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookRequest {
    pub order_id: Uuid,
    pub order_items: Vec<OrderItem>,
}

impl From<&Order> for CookRequest {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id,
            order_items: order.order_items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_missing_items_is_empty() {
        let req: CreateOrderRequest = serde_json::from_str(r#"{"orderData":"x"}"#).unwrap();
        assert!(req.order_items.is_empty());
        assert_eq!(req.order_data, "x");
    }

    #[test]
    fn cook_request_from_order() {
        let order = Order::new(Uuid::new_v4(), vec![OrderItem::new("Margherita", 2)], "note");
        let cook = CookRequest::from(&order);
        assert_eq!(cook.order_id, order.order_id);
        assert_eq!(cook.order_items, order.order_items);

        let json = serde_json::to_value(&cook).unwrap();
        assert!(json.get("orderData").is_none());
        assert_eq!(json["orderItems"][0]["pizzaType"], "Margherita");
    }
}
