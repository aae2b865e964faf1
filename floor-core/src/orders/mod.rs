//! Order Lifecycle Engine
//!
//! Pure transforms over an order collection: workflow transitions in
//! `lifecycle`, filtering/sorting/aggregation for the panels in
//! `query`.

pub mod lifecycle;
pub mod query;

pub use lifecycle::*;
pub use query::*;
