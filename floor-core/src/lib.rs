//! Front-of-house floor core
//!
//! Pure lifecycle engines and the viewport controller behind the
//! floor dashboard: order workflow transitions, table status rules
//! (paid cascade, waiter-call escalation), filtering/sorting for the
//! order panels, and the pan/zoom/drag interaction model for the
//! table map.
//!
//! Every mutating operation takes the current collection by reference
//! and returns a fresh one (copy-on-write at "whole floor"
//! granularity), plus an optional [`FloorEvent`] for the caller's
//! notifier. A missing id is always a silent no-op: the input is
//! returned unchanged and the event is `None`.
//!
//! The rendering layer owns event wiring; nothing in this crate
//! touches global state.

pub mod event;
pub mod intake;
pub mod orders;
pub mod seed;
pub mod tables;
pub mod viewport;

// Re-exports
pub use event::FloorEvent;
pub use viewport::{DragEnd, MapBounds, Viewport};
