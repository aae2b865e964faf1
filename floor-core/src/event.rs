//! Domain event payloads
//!
//! Returned by the lifecycle engines so an external notifier (toast,
//! log line, message bus) can compose a message from old/new status
//! and the affected entity. The core only produces these values; it
//! never publishes them anywhere itself — the rendering adapter owns
//! any subscription lifecycle.

use serde::{Deserialize, Serialize};
use shared::Point;
use shared::models::{OrderStatus, TableStatus};

/// Outcome of a mutating floor operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEvent {
    /// An order moved through (or was set to) a workflow status
    OrderStatusChanged {
        order_id: String,
        table_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },
    /// A table changed status; `orders_completed` counts orders swept
    /// to Completed by a paid cascade, `orders_cleared` is set when
    /// the order list was wiped
    TableStatusChanged {
        table_id: String,
        from: TableStatus,
        to: TableStatus,
        orders_cleared: bool,
        orders_completed: usize,
    },
    /// Waiter call flag flipped; `escalated` is set when turning the
    /// call on also forced the table to Attention
    WaiterCallToggled {
        table_id: String,
        active: bool,
        escalated: bool,
    },
    /// A drag gesture committed a new stored position
    TablePositionChanged { table_id: String, position: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_wire_shape() {
        let event = FloorEvent::OrderStatusChanged {
            order_id: "ab12cd3".to_string(),
            table_id: "0".to_string(),
            from: OrderStatus::Pending,
            to: OrderStatus::Preparing,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ORDER_STATUS_CHANGED");
        assert_eq!(json["from"], "PENDING");
        assert_eq!(json["to"], "PREPARING");

        let back: FloorEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
