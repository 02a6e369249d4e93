//! # Platform Tracking
//!
//! The platform rides a horizontal track shared by both rows. Its position is a
//! percentage of the track width and only a drag gesture moves it.
//!
//! ```text
//! Idle ──begin_drag──► Dragging ──drag_to──► Dragging
//!  ▲                      │
//!  └──────end_drag────────┘
//! ```

/// Where the platform starts when nothing else is configured.
pub const DEFAULT_PLATFORM_POSITION: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A pointer location measured against the track's current bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPointer {
    /// Distance from the track's left edge. May be negative or past `width`.
    pub offset: f64,
    /// Track width at the moment of measurement.
    pub width: f64,
}

impl TrackPointer {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// The pointer as a clamped percentage of the track.
    pub fn percent(&self) -> f64 {
        percent_from_pointer(self.offset, self.width)
    }
}

/// `clamp(0, 100, offset / width * 100)`. A degenerate track maps to 0.
pub fn percent_from_pointer(offset: f64, width: f64) -> f64 {
    if width <= 0.0 || !width.is_finite() || offset.is_nan() {
        return 0.0;
    }
    clamp_percent(offset / width * 100.0)
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    position: f64,
    state: DragState,
}

impl Default for Platform {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_POSITION)
    }
}

impl Platform {
    pub fn new(position: f64) -> Self {
        Self {
            position: clamp_percent(position),
            state: DragState::Idle,
        }
    }

    /// Current position in `[0, 100]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Start a drag and jump to the pointer.
    pub fn begin_drag(&mut self, pointer: TrackPointer) {
        self.state = DragState::Dragging;
        self.position = pointer.percent();
    }

    /// Follow the pointer. Returns false (and does nothing) when not dragging.
    pub fn drag_to(&mut self, pointer: TrackPointer) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.position = pointer.percent();
        true
    }

    /// Finish the drag, leaving the platform where it is.
    pub fn end_drag(&mut self) {
        self.state = DragState::Idle;
    }
}
