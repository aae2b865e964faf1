//! Error types for the floor core
//!
//! The lifecycle engines are total: a missing id is a silent no-op,
//! never an error. `FloorError` only surfaces at the intake boundary,
//! where malformed data handed over by the external source is a
//! caller bug worth naming.

use thiserror::Error;

/// Result alias for floor operations
pub type FloorResult<T> = Result<T, FloorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FloorError {
    /// Two tables share an id
    #[error("duplicate table id: {0}")]
    DuplicateTableId(String),

    /// Two orders share an id (across the whole floor)
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),

    /// Table capacity must seat at least one guest
    #[error("table {table_id} has invalid capacity {capacity}")]
    InvalidCapacity { table_id: String, capacity: i32 },

    /// Orders must carry at least one item
    #[error("order {0} has no items")]
    EmptyOrder(String),

    /// Order stored under a table it does not reference
    #[error("order {order_id} references table {referenced} but is stored under {actual}")]
    TableMismatch {
        order_id: String,
        referenced: String,
        actual: String,
    },

    /// Item quantity must be positive
    #[error("item {item_id} in order {order_id} has invalid quantity {quantity}")]
    InvalidQuantity {
        order_id: String,
        item_id: String,
        quantity: i32,
    },

    /// Item price must be non-negative
    #[error("item {item_id} in order {order_id} has negative price {price}")]
    NegativePrice {
        order_id: String,
        item_id: String,
        price: f64,
    },
}
