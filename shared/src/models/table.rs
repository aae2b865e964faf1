//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::models::order::Order;
use crate::types::Point;

/// Table status
///
/// No internal automaton: transitions are driven by the table
/// lifecycle engine, which only enforces two coupling rules (paid
/// sweeps active orders to completed; a waiter call escalates to
/// Attention).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Active,
    Attention,
    Paid,
}

impl TableStatus {
    pub fn label(self) -> &'static str {
        match self {
            TableStatus::Available => "Available",
            TableStatus::Active => "Active",
            TableStatus::Attention => "Needs Attention",
            TableStatus::Paid => "Paid",
        }
    }

    /// CSS class pair for the status chip
    pub fn color_class(self) -> &'static str {
        match self {
            TableStatus::Available => "bg-emerald-100 text-emerald-800",
            TableStatus::Active => "bg-amber-100 text-amber-800",
            TableStatus::Attention => "bg-rose-100 text-rose-800",
            TableStatus::Paid => "bg-indigo-100 text-indigo-800",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    /// Display sequence number (human-facing, not a key)
    pub number: i32,
    pub capacity: i32,
    pub status: TableStatus,
    /// Position in map space, committed by drag gestures
    pub position: Point,
    pub orders: Vec<Order>,
    pub call_waiter: bool,
}

impl Table {
    /// Orders still owed to the kitchen/runner (pending, preparing,
    /// ready). Drives the badge on table cards; served orders do not
    /// count.
    pub fn pending_order_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|order| order.status.is_open())
            .count()
    }
}
