//! Randomized floor generation
//!
//! Stand-in for the external data source: builds a plausible floor of
//! tables with order history so the dashboard has something to show.
//! Output always satisfies the intake contract (`validate_floor`).

use rand::Rng;
use rand::seq::SliceRandom;

use shared::models::{Order, OrderItem, OrderStatus, Table, TableStatus};
use shared::util::{now_millis, short_id};
use shared::{Point, Timestamp};

const MENU: &[(&str, f64)] = &[
    ("Margherita Pizza", 12.99),
    ("Spaghetti Carbonara", 14.99),
    ("Caesar Salad", 8.99),
    ("Grilled Salmon", 18.99),
    ("Cheeseburger", 10.99),
    ("Tiramisu", 6.99),
    ("Iced Tea", 3.99),
    ("Espresso", 2.99),
];

/// Grid cell edge for the initial layout (map units)
const CELL_SIZE: f64 = 100.0;
/// Positions wobble within their cell by up to ± half of this
const JITTER: f64 = 20.0;

fn seed_items(rng: &mut impl Rng, count: usize) -> Vec<OrderItem> {
    (0..count)
        .map(|_| {
            let (name, price) = MENU.choose(rng).copied().unwrap_or(MENU[0]);
            OrderItem {
                id: short_id(),
                name: name.to_string(),
                quantity: rng.gen_range(1..=3),
                price,
                notes: rng.gen_bool(0.3).then(|| "No onions please".to_string()),
            }
        })
        .collect()
}

fn seed_orders(rng: &mut impl Rng, table_id: &str, count: usize, now: Timestamp) -> Vec<Order> {
    let statuses = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    (0..count)
        .map(|i| {
            let item_count = rng.gen_range(1..=3);
            let items = seed_items(rng, item_count);
            // The most recent order tends to be in an early stage.
            let status = if i == count - 1 && count > 1 {
                statuses[rng.gen_range(0..3)]
            } else {
                statuses[rng.gen_range(0..statuses.len())]
            };

            let mut order = Order::new(
                short_id(),
                table_id,
                items,
                now - rng.gen_range(0..120) * 60_000,
            );
            order.status = status;
            order.customer_name = rng.gen_bool(0.5).then(|| format!("Customer {}", i + 1));
            order
        })
        .collect()
}

/// Generate a floor of `count` tables laid out on a jittered grid.
pub fn seed_floor(count: usize) -> Vec<Table> {
    let mut rng = rand::thread_rng();
    let now = now_millis();

    let grid_size = (count as f64).sqrt().ceil() as usize;
    let mut occupied = vec![vec![false; grid_size]; grid_size];

    (0..count)
        .map(|i| {
            // Find a free grid cell, then wobble within it.
            let (mut col, mut row);
            loop {
                col = rng.gen_range(0..grid_size);
                row = rng.gen_range(0..grid_size);
                if !occupied[row][col] {
                    break;
                }
            }
            occupied[row][col] = true;

            let position = Point::new(
                col as f64 * CELL_SIZE + rng.gen_range(-JITTER / 2.0..JITTER / 2.0),
                row as f64 * CELL_SIZE + rng.gen_range(-JITTER / 2.0..JITTER / 2.0),
            );

            let table_id = i.to_string();
            let roll: f64 = rng.gen_range(0.0..1.0);
            let (status, mut orders, call_waiter) = if roll < 0.4 {
                (TableStatus::Available, vec![], false)
            } else if roll < 0.7 {
                let n = rng.gen_range(1..=2);
                let orders = seed_orders(&mut rng, &table_id, n, now);
                (TableStatus::Active, orders, false)
            } else if roll < 0.85 {
                let n = rng.gen_range(1..=3);
                let orders = seed_orders(&mut rng, &table_id, n, now);
                (TableStatus::Attention, orders, rng.gen_bool(0.5))
            } else {
                let n = rng.gen_range(2..=3);
                let orders = seed_orders(&mut rng, &table_id, n, now);
                (TableStatus::Paid, orders, false)
            };

            // A paid table's history is settled.
            if status == TableStatus::Paid {
                for order in &mut orders {
                    order.status = OrderStatus::Completed;
                }
            }

            Table {
                id: table_id,
                number: i as i32 + 1,
                capacity: rng.gen_range(2..=5),
                status,
                position,
                orders,
                call_waiter,
            }
        })
        .collect()
}
