//! Table Lifecycle Engine

pub mod lifecycle;

pub use lifecycle::*;
