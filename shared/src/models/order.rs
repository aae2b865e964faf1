//! Order Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Order status
///
/// Linear progression Pending → Preparing → Ready → Served → Completed.
/// Canceled is a terminal absorption state: valid as data, but no
/// workflow step produces it (nothing in the dashboard cancels an
/// order).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Next step in the workflow; `None` for terminal statuses.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Canceled => None,
        }
    }

    /// Display sort rank: earlier workflow stages come first.
    pub fn priority(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Served => 3,
            OrderStatus::Completed => 4,
            OrderStatus::Canceled => 5,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Statuses swept to Completed when the table is marked paid
    /// (everything not already settled).
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready | OrderStatus::Served
        )
    }

    /// Statuses still owed to the kitchen/runner; drives the pending
    /// badge on table cards. Served is excluded on purpose.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Served => "Served",
            OrderStatus::Completed => "Completed",
            OrderStatus::Canceled => "Canceled",
        }
    }

    /// CSS class pair for the status chip
    pub fn color_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "text-amber-500 bg-amber-50",
            OrderStatus::Preparing => "text-purple-500 bg-purple-50",
            OrderStatus::Ready => "text-blue-500 bg-blue-50",
            OrderStatus::Served => "text-green-500 bg-green-50",
            OrderStatus::Completed => "text-emerald-500 bg-emerald-50",
            OrderStatus::Canceled => "text-gray-500 bg-gray-50",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order line item
///
/// Immutable after creation; the order total is fixed when the order
/// is built and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    /// Price in currency unit
    pub price: f64,
    pub notes: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Owning table (back-reference only; the table owns its orders)
    pub table_id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Total amount in currency unit, fixed at creation
    pub total_amount: f64,
    /// Creation time, used for sort ordering
    pub timestamp: Timestamp,
    pub customer_name: Option<String>,
}

impl Order {
    /// Build an order, deriving `total_amount` from the items.
    pub fn new(
        id: impl Into<String>,
        table_id: impl Into<String>,
        items: Vec<OrderItem>,
        timestamp: Timestamp,
    ) -> Self {
        let total_amount = Self::total_of(&items);
        Self {
            id: id.into(),
            table_id: table_id.into(),
            items,
            status: OrderStatus::Pending,
            total_amount,
            timestamp,
            customer_name: None,
        }
    }

    /// Σ price × quantity over the items
    pub fn total_of(items: &[OrderItem]) -> f64 {
        items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i32, price: f64) -> OrderItem {
        OrderItem {
            id: "i1".to_string(),
            name: name.to_string(),
            quantity,
            price,
            notes: None,
        }
    }

    #[test]
    fn progression_is_linear() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Served));
        assert_eq!(OrderStatus::Served.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Canceled.next(), None);
    }

    #[test]
    fn terminal_matches_next() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Served,
            OrderStatus::Completed,
            OrderStatus::Canceled,
        ] {
            assert_eq!(status.is_terminal(), status.next().is_none());
        }
    }

    #[test]
    fn priority_ranks_follow_workflow() {
        assert_eq!(OrderStatus::Pending.priority(), 0);
        assert_eq!(OrderStatus::Canceled.priority(), 5);
    }

    #[test]
    fn open_excludes_served() {
        assert!(OrderStatus::Ready.is_open());
        assert!(!OrderStatus::Served.is_open());
        assert!(OrderStatus::Served.is_active());
    }

    #[test]
    fn total_sums_line_items() {
        let items = vec![item("Margherita Pizza", 2, 12.99), item("Espresso", 1, 2.99)];
        let order = Order::new("o1", "t1", items, 0);

        assert!((order.total_amount - 28.97).abs() < 1e-9);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(Order::total_of(&[]), 0.0);
    }

    #[test]
    fn status_serde_shape() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"PREPARING\"");
    }
}
