//! Map canvas dimensions
//!
//! The canvas grows with the floor: each axis extends to the farthest
//! table plus a margin, never shrinking below a fixed floor size.
//! Recomputed whenever tables move or the set changes.

use shared::models::Table;

/// Minimum canvas extent on each axis
pub const MAP_MIN_EXTENT: f64 = 500.0;

/// Clearance past the farthest table on each axis
pub const MAP_MARGIN: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub width: f64,
    pub height: f64,
}

/// Derived canvas size for the current floor.
pub fn map_bounds(tables: &[Table]) -> MapBounds {
    let max_x = tables.iter().map(|t| t.position.x).fold(f64::MIN, f64::max);
    let max_y = tables.iter().map(|t| t.position.y).fold(f64::MIN, f64::max);

    MapBounds {
        width: MAP_MIN_EXTENT.max(max_x + MAP_MARGIN),
        height: MAP_MIN_EXTENT.max(max_y + MAP_MARGIN),
    }
}
