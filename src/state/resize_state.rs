//! ResizeState - Drag Resizing of the Side Panel
//!
//! A drag lives in a [`DragSession`]. The window-level move and release
//! listeners are only rendered while a session exists, so ending the session
//! is what removes them.
//!
//! The container's bounds are recorded on every layout pass, so a drag
//! measures from where the panel really is, even when it overflows the
//! window.

use tracing::{debug, trace};

use crate::domain::config::DragBounds;

/// Pixel geometry of the container at the time of a pointer move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    /// Left offset of the container
    pub left: f32,
    /// Rendered width of the container
    pub width: f32,
}

impl ContainerGeometry {
    /// Geometry of a panel pinned to the right edge at `right`
    pub fn right_anchored(right: f32, width: f32) -> Self {
        Self {
            left: right - width,
            width,
        }
    }

    /// Right edge, which stays put while the left edge is dragged
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Why a drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// Mouse button released
    Released,
    /// A move arrived with no button held (released outside the window)
    CaptureLost,
    /// The window lost focus mid-drag
    WindowDeactivated,
    /// The host asked for the drag to stop
    Cancelled,
}

/// Counters for one press-drag-release gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    /// Pointer moves seen
    pub moves: u32,
    /// Moves whose width was applied
    pub applied: u32,
    /// Last width applied, in pixels
    pub last_applied: Option<f32>,
}

/// Drag-active / drag-inactive mode of the resizer
#[derive(Debug, Clone, Default)]
pub struct ResizeState {
    bounds: DragBounds,
    session: Option<DragSession>,
    measured: Option<ContainerGeometry>,
}

impl ResizeState {
    pub fn new(bounds: DragBounds) -> Self {
        Self {
            bounds,
            session: None,
            measured: None,
        }
    }

    /// Record the container bounds from the latest layout
    pub fn record_geometry(&mut self, geometry: ContainerGeometry) {
        self.measured = Some(geometry);
    }

    /// Container bounds from the latest layout, if it has been laid out
    pub fn geometry(&self) -> Option<ContainerGeometry> {
        self.measured
    }

    /// Press on the resizer: enter drag-active mode
    pub fn init_drag(&mut self) {
        if self.session.is_some() {
            trace!("Drag already active");
            return;
        }
        self.session = Some(DragSession::default());
        debug!("Side panel drag started");
    }

    /// Pointer moved to `pointer_x` while dragging.
    ///
    /// Returns the width to apply, in pixels, or `None` when no drag is
    /// active or the candidate falls outside the bounds. Out-of-range
    /// candidates are dropped, not clamped.
    pub fn start_drag(&mut self, pointer_x: f32, geometry: ContainerGeometry) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.moves += 1;

        let candidate = geometry.right() - pointer_x;
        if !self.bounds.accepts(candidate) {
            trace!(candidate, "Drag width out of range, ignored");
            return None;
        }

        session.applied += 1;
        session.last_applied = Some(candidate);
        Some(candidate)
    }

    /// Release: leave drag-active mode. Returns the finished session, if any.
    pub fn stop_drag(&mut self, reason: DragEnd) -> Option<DragSession> {
        let session = self.session.take()?;
        debug!(
            ?reason,
            moves = session.moves,
            applied = session.applied,
            last_width = ?session.last_applied,
            "Side panel drag stopped"
        );
        Some(session)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
