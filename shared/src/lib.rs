//! Shared types for the front-of-house floor core
//!
//! Domain models (tables, orders), status enumerations, common types,
//! and the error type. Pure data — the lifecycle engines live in
//! `floor-core`.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{FloorError, FloorResult};
pub use types::{Point, Timestamp};
