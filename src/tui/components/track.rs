//! # Track Component
//!
//! The horizontal track between the two rows, with the draggable platform.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TrackState` lives in `TuiState`, remembers where the track was last
//!   drawn, and turns mouse events into `TrackEvent`s
//! - `Track` is created each frame with borrowed state and the platform props
//!
//! ## Drag capture
//!
//! Pressing the left button on the track acquires a `DragCapture`. While it is
//! held, drag and release events anywhere on screen belong to the platform,
//! since the pointer may leave the track mid-drag. The capture is released on
//! button-up or when the UI shuts down, whichever comes first.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::core::platform::TrackPointer;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLATFORM: &str = "[■]";
const RAIL: &str = "─";

/// Events emitted by the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackEvent {
    Grab(TrackPointer),
    Move(TrackPointer),
    Release,
}

/// Screen-wide pointer routing, held only while a drag is active.
pub struct DragCapture {
    origin: (u16, u16),
}

impl DragCapture {
    fn acquire(col: u16, row: u16) -> Self {
        debug!("Drag capture acquired at ({}, {})", col, row);
        Self { origin: (col, row) }
    }
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        debug!("Drag capture released (started at {:?})", self.origin);
    }
}

/// Persistent state for the track.
#[derive(Default)]
pub struct TrackState {
    /// Whole track block as last rendered; mouse-down here starts a drag.
    hit_area: Rect,
    /// Rail inside the borders; pointer offsets are measured against it.
    rail: Rect,
    capture: Option<DragCapture>,
}

impl TrackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_area(&self) -> Rect {
        self.hit_area
    }

    pub fn rail(&self) -> Rect {
        self.rail
    }

    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Drop the capture if held. Returns whether one was held.
    pub fn release_capture(&mut self) -> bool {
        self.capture.take().is_some()
    }

    /// Measure a screen column against the rail's current bounds.
    ///
    /// The first and last rail cells map to 0% and 100%.
    pub fn pointer(&self, col: u16) -> TrackPointer {
        let offset = f64::from(col) - f64::from(self.rail.x);
        let span = f64::from(self.rail.width.saturating_sub(1));
        TrackPointer::new(offset, span)
    }
}

impl EventHandler for TrackState {
    type Event = TrackEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TrackEvent> {
        match *event {
            TuiEvent::MouseDown(col, row) if self.hit_area.contains(Position::new(col, row)) => {
                self.capture = Some(DragCapture::acquire(col, row));
                Some(TrackEvent::Grab(self.pointer(col)))
            }
            TuiEvent::MouseDrag(col, _) if self.is_captured() => {
                Some(TrackEvent::Move(self.pointer(col)))
            }
            TuiEvent::MouseUp(_, _) if self.is_captured() => {
                self.release_capture();
                Some(TrackEvent::Release)
            }
            _ => None,
        }
    }
}

/// Column of the platform's centre cell on a rail.
pub fn platform_column(rail: Rect, position: f64) -> u16 {
    let span = f64::from(rail.width.saturating_sub(1));
    rail.x + (position / 100.0 * span).round() as u16
}

/// Transient render wrapper for the track.
pub struct Track<'a> {
    state: &'a mut TrackState,
    position: f64,
    dragging: bool,
}

impl<'a> Track<'a> {
    pub fn new(state: &'a mut TrackState, position: f64, dragging: bool) -> Self {
        Self {
            state,
            position,
            dragging,
        }
    }
}

impl Component for Track<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.dragging {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title("Track (drag the platform)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.hit_area = area;
        self.state.rail = Rect { height: inner.height.min(1), ..inner };
        let rail = self.state.rail;
        if rail.width == 0 || rail.height == 0 {
            return;
        }

        let buf = frame.buffer_mut();
        buf.set_string(
            rail.x,
            rail.y,
            RAIL.repeat(rail.width as usize),
            Style::default().fg(Color::DarkGray),
        );

        let mut platform = Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD);
        if self.dragging {
            platform = platform.add_modifier(Modifier::REVERSED);
        }
        let centre = platform_column(rail, self.position);
        let glyph_width = (PLATFORM.chars().count() as u16).min(rail.width);
        let right_edge = rail.x + rail.width - glyph_width;
        let x = centre.saturating_sub(glyph_width / 2).clamp(rail.x, right_edge);
        buf.set_stringn(x, rail.y, PLATFORM, glyph_width as usize, platform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_state(width: u16) -> TrackState {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TrackState::new();
        terminal
            .draw(|f| Track::new(&mut state, 50.0, false).render(f, f.area()))
            .unwrap();
        state
    }

    #[test]
    fn test_render_records_bounds() {
        let state = rendered_state(42);
        assert_eq!(state.hit_area(), Rect::new(0, 0, 42, 3));
        assert_eq!(state.rail(), Rect::new(1, 1, 40, 1));
    }

    #[test]
    fn test_pointer_ends_of_rail() {
        let state = rendered_state(42);
        assert_eq!(state.pointer(1).percent(), 0.0);
        assert_eq!(state.pointer(40).percent(), 100.0);
        // Border cells and beyond clamp.
        assert_eq!(state.pointer(0).percent(), 0.0);
        assert_eq!(state.pointer(41).percent(), 100.0);
    }

    #[test]
    fn test_drag_capture_lifecycle() {
        let mut state = rendered_state(42);

        // Drag without a prior press on the track is ignored.
        assert_eq!(state.handle_event(&TuiEvent::MouseDrag(10, 1)), None);

        let grab = state.handle_event(&TuiEvent::MouseDown(1, 1));
        assert!(matches!(grab, Some(TrackEvent::Grab(p)) if p.percent() == 0.0));
        assert!(state.is_captured());

        // Moves far outside the track still count while captured.
        let moved = state.handle_event(&TuiEvent::MouseDrag(200, 30));
        assert!(matches!(moved, Some(TrackEvent::Move(p)) if p.percent() == 100.0));

        assert_eq!(
            state.handle_event(&TuiEvent::MouseUp(200, 30)),
            Some(TrackEvent::Release)
        );
        assert!(!state.is_captured());
        assert_eq!(state.handle_event(&TuiEvent::MouseUp(5, 1)), None);
    }

    #[test]
    fn test_press_outside_track_does_not_capture() {
        let mut state = rendered_state(42);
        assert_eq!(state.handle_event(&TuiEvent::MouseDown(5, 10)), None);
        assert!(!state.is_captured());
    }

    #[test]
    fn test_release_capture_on_teardown() {
        let mut state = rendered_state(42);
        state.handle_event(&TuiEvent::MouseDown(3, 1));
        assert!(state.release_capture());
        assert!(!state.release_capture());
    }

    #[test]
    fn test_platform_drawn_at_position() {
        let backend = TestBackend::new(42, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TrackState::new();
        terminal
            .draw(|f| Track::new(&mut state, 100.0, true).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Track (drag the platform)"));
        assert!(text.contains("─[■]"));
        assert_eq!(platform_column(state.rail(), 100.0), 40);
        assert_eq!(platform_column(state.rail(), 0.0), 1);
    }
}
