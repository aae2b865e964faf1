//! Order workflow transitions
//!
//! Copy-on-write: each operation returns a fresh `Vec<Order>` built
//! from the input snapshot. The second tuple element is the event for
//! the caller's notifier; `None` means nothing changed (unknown id,
//! or advancing a terminal order).

use shared::models::{Order, OrderStatus};
use tracing::debug;

use crate::event::FloorEvent;

/// Advance one order to its next workflow status.
///
/// Pending → Preparing → Ready → Served → Completed. Advancing a
/// Completed or Canceled order is a defined no-op (`next()` has no
/// transition to offer); the UI hides the advance control for those,
/// so this path only exists for robustness.
pub fn advance_status(orders: &[Order], order_id: &str) -> (Vec<Order>, Option<FloorEvent>) {
    let next = orders
        .iter()
        .find(|order| order.id == order_id)
        .and_then(|order| order.status.next());

    match next {
        Some(status) => set_status(orders, order_id, status),
        None => (orders.to_vec(), None),
    }
}

/// Overwrite the status of exactly one order; all others unchanged.
///
/// Unknown `order_id` returns the collection unchanged with no event.
pub fn set_status(
    orders: &[Order],
    order_id: &str,
    status: OrderStatus,
) -> (Vec<Order>, Option<FloorEvent>) {
    let mut event = None;

    let next = orders
        .iter()
        .map(|order| {
            if order.id == order_id {
                debug!(
                    order_id,
                    table_id = %order.table_id,
                    from = %order.status,
                    to = %status,
                    "order status updated"
                );
                event = Some(FloorEvent::OrderStatusChanged {
                    order_id: order.id.clone(),
                    table_id: order.table_id.clone(),
                    from: order.status,
                    to: status,
                });
                Order {
                    status,
                    ..order.clone()
                }
            } else {
                order.clone()
            }
        })
        .collect();

    (next, event)
}
