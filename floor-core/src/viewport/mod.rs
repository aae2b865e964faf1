//! Viewport Controller
//!
//! Pan/zoom state for the table map plus per-table drag
//! repositioning. The two gesture modes never share a pointer
//! sequence: while a table drag is live it owns the pointer and pan
//! input is ignored. Drag mode itself is an explicit toggle; with it
//! off (the default) every pointer drag pans the map.
//!
//! The controller is plain state driven by `begin_*` / `continue_*` /
//! `end_*` calls — the rendering adapter wires pointer events in and
//! applies the emitted deltas via `tables::move_table`. Each delta is
//! derived from the last observed pointer position, so arbitrarily
//! chatty pointer-move streams accumulate no drift.

mod bounds;

pub use bounds::{MAP_MARGIN, MAP_MIN_EXTENT, MapBounds, map_bounds};

use shared::Point;
use tracing::debug;

pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 1.5;
pub const ZOOM_STEP: f64 = 0.1;

/// Keep the scale exactly on the 0.1 step grid. Repeated ±0.1 f64
/// additions drift (1.0 − 5×0.1 ends at 0.500…01), which would leak
/// into every drag delta divided by the scale.
fn snap_to_step(scale: f64) -> f64 {
    (scale * 10.0).round() / 10.0
}

/// Pointer travel (screen px, per axis) below which a gesture still
/// counts as a click rather than a drag.
pub const DRAG_DEAD_ZONE: f64 = 2.0;

/// Live table-drag gesture
#[derive(Debug, Clone)]
struct TableDrag {
    table_id: String,
    last_pointer: Point,
    /// Latched once the pointer leaves the dead-zone; decides click
    /// suppression at gesture end.
    moved: bool,
}

/// How a table-drag gesture ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub table_id: String,
    /// True when the gesture repositioned the table. The terminating
    /// click must then be swallowed: one pointer sequence selects or
    /// moves, never both.
    pub moved: bool,
}

/// Map viewport: pan offset, zoom scale, and gesture state
#[derive(Debug, Clone)]
pub struct Viewport {
    offset: Point,
    scale: f64,
    panning: bool,
    pan_origin: Point,
    drag_enabled: bool,
    drag: Option<TableDrag>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: 1.0,
            panning: false,
            pan_origin: Point::ZERO,
            drag_enabled: false,
            drag: None,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Id of the table owning the current pointer sequence, if any.
    pub fn dragged_table_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.table_id.as_str())
    }

    // ---- zoom ----

    pub fn zoom_in(&mut self) {
        self.scale = snap_to_step(self.scale + ZOOM_STEP).min(SCALE_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.scale = snap_to_step(self.scale - ZOOM_STEP).max(SCALE_MIN);
    }

    // ---- map pan ----

    /// Start panning from a pointer position. Ignored while a table
    /// drag owns the pointer.
    pub fn begin_pan(&mut self, pointer: Point) {
        if self.drag.is_some() {
            return;
        }
        self.panning = true;
        self.pan_origin = pointer - self.offset;
    }

    /// Follow the pointer while panning.
    pub fn continue_pan(&mut self, pointer: Point) {
        if !self.panning || self.drag.is_some() {
            return;
        }
        self.offset = pointer - self.pan_origin;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    // ---- table drag ----

    /// Toggle drag mode (off = pointer drags pan the map).
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    /// Start dragging a table. Returns false (and does nothing) when
    /// drag mode is off.
    pub fn begin_drag(&mut self, table_id: impl Into<String>, pointer: Point) -> bool {
        if !self.drag_enabled {
            return false;
        }
        let table_id = table_id.into();
        debug!(table_id, "table drag started");
        self.drag = Some(TableDrag {
            table_id,
            last_pointer: pointer,
            moved: false,
        });
        true
    }

    /// Feed a pointer-move into the live drag.
    ///
    /// Movement within the dead-zone (≤ 2 px on both axes) returns
    /// `None` and does not consume the pointer position, so a shaky
    /// click stays a click. Beyond it, the screen-space delta is
    /// divided by the current scale so the table travels the same
    /// map-space distance at every zoom level; the caller adds the
    /// returned delta to the table's stored position.
    pub fn continue_drag(&mut self, pointer: Point) -> Option<Point> {
        let drag = self.drag.as_mut()?;
        let delta = pointer - drag.last_pointer;
        if delta.x.abs() <= DRAG_DEAD_ZONE && delta.y.abs() <= DRAG_DEAD_ZONE {
            return None;
        }

        drag.moved = true;
        drag.last_pointer = pointer;
        Some(Point::new(delta.x / self.scale, delta.y / self.scale))
    }

    /// Finish the drag gesture. `None` when no drag was live.
    pub fn end_drag(&mut self) -> Option<DragEnd> {
        let drag = self.drag.take()?;
        debug!(table_id = %drag.table_id, moved = drag.moved, "table drag ended");
        Some(DragEnd {
            table_id: drag.table_id,
            moved: drag.moved,
        })
    }
}
