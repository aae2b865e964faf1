//! Data models
//!
//! Shared between the lifecycle engines and the rendering layer.
//! All IDs are short base36 strings supplied by the data source.

pub mod order;
pub mod table;

// Re-exports
pub use order::*;
pub use table::*;
