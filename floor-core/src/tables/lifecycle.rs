//! Table status rules
//!
//! Two coupling rules are enforced here and nowhere else: marking a
//! table Paid sweeps its active orders to Completed, and turning the
//! waiter call on escalates the table to Attention (turning it off
//! never de-escalates). Everything else is an unconditional
//! overwrite.
//!
//! Same contract as the order engine: pure copy-on-write over the
//! table collection, unknown ids are silent no-ops with a `None`
//! event.

use shared::Point;
use shared::models::{Order, OrderStatus, Table, TableStatus};
use tracing::debug;

use crate::event::FloorEvent;

/// Set a table's status.
///
/// `clear_orders` wipes the order list regardless of the target
/// status (used when resetting a table to Available). Otherwise,
/// moving to Paid force-completes every order still active; canceled
/// and completed orders are left alone. Any other target status
/// leaves orders as-is.
pub fn update_table_status(
    tables: &[Table],
    table_id: &str,
    status: TableStatus,
    clear_orders: bool,
) -> (Vec<Table>, Option<FloorEvent>) {
    let mut event = None;

    let next = tables
        .iter()
        .map(|table| {
            if table.id != table_id {
                return table.clone();
            }

            let mut orders_completed = 0;
            let orders = if clear_orders {
                Vec::new()
            } else if status == TableStatus::Paid {
                table
                    .orders
                    .iter()
                    .map(|order| {
                        if order.status.is_active() {
                            orders_completed += 1;
                            Order {
                                status: OrderStatus::Completed,
                                ..order.clone()
                            }
                        } else {
                            order.clone()
                        }
                    })
                    .collect()
            } else {
                table.orders.clone()
            };

            debug!(
                table_id,
                from = %table.status,
                to = %status,
                clear_orders,
                orders_completed,
                "table status updated"
            );
            event = Some(FloorEvent::TableStatusChanged {
                table_id: table.id.clone(),
                from: table.status,
                to: status,
                orders_cleared: clear_orders,
                orders_completed,
            });

            Table {
                status,
                orders,
                ..table.clone()
            }
        })
        .collect();

    (next, event)
}

/// Flip the waiter-call flag.
///
/// Calling a waiter escalates the table to Attention; canceling the
/// call leaves the status where it is. The asymmetry is intentional:
/// staff clear the Attention state explicitly, not by the guest
/// withdrawing the call.
pub fn toggle_call_waiter(
    tables: &[Table],
    table_id: &str,
    active: bool,
) -> (Vec<Table>, Option<FloorEvent>) {
    let mut event = None;

    let next = tables
        .iter()
        .map(|table| {
            if table.id != table_id {
                return table.clone();
            }

            let escalated = active && table.status != TableStatus::Attention;
            let status = if escalated {
                TableStatus::Attention
            } else {
                table.status
            };

            debug!(table_id, active, escalated, "waiter call toggled");
            event = Some(FloorEvent::WaiterCallToggled {
                table_id: table.id.clone(),
                active,
                escalated,
            });

            Table {
                call_waiter: active,
                status,
                ..table.clone()
            }
        })
        .collect();

    (next, event)
}

/// Commit a new stored position for one table (the final step of a
/// drag gesture).
pub fn move_table(
    tables: &[Table],
    table_id: &str,
    position: Point,
) -> (Vec<Table>, Option<FloorEvent>) {
    let mut event = None;

    let next = tables
        .iter()
        .map(|table| {
            if table.id != table_id {
                return table.clone();
            }

            event = Some(FloorEvent::TablePositionChanged {
                table_id: table.id.clone(),
                position,
            });

            Table {
                position,
                ..table.clone()
            }
        })
        .collect();

    (next, event)
}

/// Set an order's status when orders live nested inside their tables
/// (the floor page's shape). First id match wins; the event carries
/// the owning table.
pub fn set_order_status(
    tables: &[Table],
    order_id: &str,
    status: OrderStatus,
) -> (Vec<Table>, Option<FloorEvent>) {
    let mut event = None;

    let next = tables
        .iter()
        .map(|table| {
            if event.is_some() || !table.orders.iter().any(|o| o.id == order_id) {
                return table.clone();
            }

            let (orders, order_event) = crate::orders::set_status(&table.orders, order_id, status);
            event = order_event;

            Table {
                orders,
                ..table.clone()
            }
        })
        .collect();

    (next, event)
}

/// Flat view of every order on the floor, for the all-orders panel.
pub fn all_orders(tables: &[Table]) -> Vec<Order> {
    tables.iter().flat_map(|table| table.orders.clone()).collect()
}

pub fn find_table<'a>(tables: &'a [Table], table_id: &str) -> Option<&'a Table> {
    tables.iter().find(|table| table.id == table_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItem;

    fn order(id: &str, table_id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            table_id: table_id.to_string(),
            items: vec![OrderItem {
                id: format!("{id}-i"),
                name: "Cheeseburger".to_string(),
                quantity: 1,
                price: 10.99,
                notes: None,
            }],
            status,
            total_amount: 10.99,
            timestamp: 0,
            customer_name: None,
        }
    }

    fn table(id: &str, status: TableStatus, orders: Vec<Order>) -> Table {
        Table {
            id: id.to_string(),
            number: 1,
            capacity: 4,
            status,
            position: Point::ZERO,
            orders,
            call_waiter: false,
        }
    }

    fn one_of_each(table_id: &str) -> Vec<Order> {
        vec![
            order("o1", table_id, OrderStatus::Pending),
            order("o2", table_id, OrderStatus::Preparing),
            order("o3", table_id, OrderStatus::Ready),
            order("o4", table_id, OrderStatus::Served),
            order("o5", table_id, OrderStatus::Completed),
            order("o6", table_id, OrderStatus::Canceled),
        ]
    }

    #[test]
    fn paid_sweeps_active_orders_to_completed() {
        let tables = vec![table("t1", TableStatus::Active, one_of_each("t1"))];

        let (next, event) = update_table_status(&tables, "t1", TableStatus::Paid, false);

        assert_eq!(next[0].status, TableStatus::Paid);
        let statuses: Vec<OrderStatus> = next[0].orders.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            [
                OrderStatus::Completed,
                OrderStatus::Completed,
                OrderStatus::Completed,
                OrderStatus::Completed,
                OrderStatus::Completed,
                OrderStatus::Canceled,
            ]
        );
        assert_eq!(
            event,
            Some(FloorEvent::TableStatusChanged {
                table_id: "t1".to_string(),
                from: TableStatus::Active,
                to: TableStatus::Paid,
                orders_cleared: false,
                orders_completed: 4,
            })
        );
    }

    #[test]
    fn clear_wipes_orders_regardless_of_status_mix() {
        let tables = vec![table("t1", TableStatus::Paid, one_of_each("t1"))];

        let (next, _) = update_table_status(&tables, "t1", TableStatus::Available, true);

        assert_eq!(next[0].status, TableStatus::Available);
        assert!(next[0].orders.is_empty());
    }

    #[test]
    fn non_paid_status_leaves_orders_alone() {
        let tables = vec![table("t1", TableStatus::Available, one_of_each("t1"))];

        let (next, _) = update_table_status(&tables, "t1", TableStatus::Active, false);

        assert_eq!(next[0].orders, tables[0].orders);
    }

    #[test]
    fn other_tables_untouched() {
        let tables = vec![
            table("t1", TableStatus::Active, one_of_each("t1")),
            table("t2", TableStatus::Active, one_of_each("t2")),
        ];

        let (next, _) = update_table_status(&tables, "t1", TableStatus::Paid, false);

        assert_eq!(next[1], tables[1]);
    }

    #[test]
    fn waiter_call_escalates_but_never_de_escalates() {
        let tables = vec![table("t1", TableStatus::Active, vec![])];

        let (tables, event) = toggle_call_waiter(&tables, "t1", true);
        assert!(tables[0].call_waiter);
        assert_eq!(tables[0].status, TableStatus::Attention);
        assert_eq!(
            event,
            Some(FloorEvent::WaiterCallToggled {
                table_id: "t1".to_string(),
                active: true,
                escalated: true,
            })
        );

        let (tables, event) = toggle_call_waiter(&tables, "t1", false);
        assert!(!tables[0].call_waiter);
        // Status stays escalated until staff reset it.
        assert_eq!(tables[0].status, TableStatus::Attention);
        assert_eq!(
            event,
            Some(FloorEvent::WaiterCallToggled {
                table_id: "t1".to_string(),
                active: false,
                escalated: false,
            })
        );
    }

    #[test]
    fn waiter_call_on_attention_table_does_not_re_escalate() {
        let tables = vec![table("t1", TableStatus::Attention, vec![])];

        let (_, event) = toggle_call_waiter(&tables, "t1", true);

        assert_eq!(
            event,
            Some(FloorEvent::WaiterCallToggled {
                table_id: "t1".to_string(),
                active: true,
                escalated: false,
            })
        );
    }

    #[test]
    fn move_table_overwrites_position() {
        let tables = vec![
            table("t1", TableStatus::Available, vec![]),
            table("t2", TableStatus::Available, vec![]),
        ];

        let (next, event) = move_table(&tables, "t2", Point::new(120.0, 80.0));

        assert_eq!(next[1].position, Point::new(120.0, 80.0));
        assert_eq!(next[0].position, Point::ZERO);
        assert_eq!(
            event,
            Some(FloorEvent::TablePositionChanged {
                table_id: "t2".to_string(),
                position: Point::new(120.0, 80.0),
            })
        );
    }

    #[test]
    fn missing_table_id_is_a_no_op() {
        let tables = vec![table("t1", TableStatus::Active, one_of_each("t1"))];

        let (next, event) = update_table_status(&tables, "nope", TableStatus::Paid, false);
        assert_eq!(next, tables);
        assert_eq!(event, None);

        let (next, event) = move_table(&tables, "nope", Point::new(1.0, 1.0));
        assert_eq!(next, tables);
        assert_eq!(event, None);

        let (next, event) = toggle_call_waiter(&tables, "nope", true);
        assert_eq!(next, tables);
        assert_eq!(event, None);
    }

    #[test]
    fn nested_order_update_finds_the_owning_table() {
        let tables = vec![
            table("t1", TableStatus::Active, vec![order("a1", "t1", OrderStatus::Pending)]),
            table("t2", TableStatus::Active, vec![order("b1", "t2", OrderStatus::Pending)]),
        ];

        let (next, event) = set_order_status(&tables, "b1", OrderStatus::Ready);

        assert_eq!(next[0].orders[0].status, OrderStatus::Pending);
        assert_eq!(next[1].orders[0].status, OrderStatus::Ready);
        assert_eq!(
            event,
            Some(FloorEvent::OrderStatusChanged {
                order_id: "b1".to_string(),
                table_id: "t2".to_string(),
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            })
        );
    }

    #[test]
    fn nested_order_update_missing_id_is_a_no_op() {
        let tables = vec![table("t1", TableStatus::Active, one_of_each("t1"))];

        let (next, event) = set_order_status(&tables, "nope", OrderStatus::Ready);

        assert_eq!(next, tables);
        assert_eq!(event, None);
    }

    #[test]
    fn all_orders_flattens_the_floor() {
        let tables = vec![
            table("t1", TableStatus::Active, vec![order("a1", "t1", OrderStatus::Pending)]),
            table("t2", TableStatus::Available, vec![]),
            table("t3", TableStatus::Active, vec![order("c1", "t3", OrderStatus::Served)]),
        ];

        let orders = all_orders(&tables);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "a1");
        assert_eq!(orders[1].id, "c1");
    }

    #[test]
    fn find_table_by_id() {
        let tables = vec![table("t1", TableStatus::Active, vec![])];

        assert_eq!(find_table(&tables, "t1").map(|t| t.id.as_str()), Some("t1"));
        assert!(find_table(&tables, "t9").is_none());
    }
}
