//! Filtering, sorting, and aggregation for the order panels

use std::collections::HashMap;

use shared::models::{Order, OrderStatus};

/// Display ordering for an order list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Workflow priority first (pending before preparing before …),
    /// newest first within the same status. Used by the side panel.
    Priority,
    /// Timestamp only, newest first. Used by the all-orders view.
    Newest,
    /// Timestamp only, oldest first.
    Oldest,
}

/// Coarse split used by the table detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPhase {
    All,
    /// Pending through Served — still on the floor
    Active,
    /// Completed or Canceled
    Closed,
}

/// Keep orders matching `status`; `None` keeps everything.
pub fn filter_by_status(orders: &[Order], status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| status.is_none_or(|s| order.status == s))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over order id, table id, and
/// item names. An empty term matches everything.
pub fn filter_by_search(orders: &[Order], term: &str) -> Vec<Order> {
    if term.is_empty() {
        return orders.to_vec();
    }
    let term = term.to_lowercase();

    orders
        .iter()
        .filter(|order| {
            order.id.to_lowercase().contains(&term)
                || order.table_id.to_lowercase().contains(&term)
                || order
                    .items
                    .iter()
                    .any(|item| item.name.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Keep orders in the given phase.
pub fn filter_by_phase(orders: &[Order], phase: OrderPhase) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| match phase {
            OrderPhase::All => true,
            OrderPhase::Active => order.status.is_active(),
            OrderPhase::Closed => order.status.is_terminal(),
        })
        .cloned()
        .collect()
}

/// Sort a snapshot for display.
pub fn sort_for_display(orders: &[Order], mode: SortMode) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    match mode {
        SortMode::Priority => {
            // Rank ascending, then newest first within a rank.
            sorted.sort_by(|a, b| {
                a.status
                    .priority()
                    .cmp(&b.status.priority())
                    .then(b.timestamp.cmp(&a.timestamp))
            });
        }
        SortMode::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::Oldest => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }
    sorted
}

/// Per-status totals for the filter-chip badges.
pub fn counts_by_status(orders: &[Order]) -> HashMap<OrderStatus, usize> {
    let mut counts = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    counts
}

/// Active/closed totals for the table detail tabs.
pub fn phase_counts(orders: &[Order]) -> (usize, usize) {
    let active = orders.iter().filter(|o| o.status.is_active()).count();
    (active, orders.len() - active)
}
