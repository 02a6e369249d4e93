//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the planner,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 250ms waiting for
//! input and only redraws after events (including terminal resize). All
//! pending events are drained before the next frame, which coalesces a burst
//! of drag moves into one redraw.
//!
//! ## Mouse Routing
//!
//! Mouse events go to the track first. While it holds the drag capture every
//! drag and release belongs to the platform, wherever the pointer is. A
//! press that the track does not claim focuses the text field under it.

mod component;
mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::ranges::RowId;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TrackEvent, TrackState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);
const ROW_PLACEHOLDER: &str = "[1-4][8-20]";

/// Which text field receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Row1,
    Row2,
    Target,
}

impl Field {
    /// Tab order, left to right on screen.
    pub const ALL: [Field; 3] = [Field::Row1, Field::Row2, Field::Target];

    pub fn next(self) -> Self {
        match self {
            Field::Row1 => Field::Row2,
            Field::Row2 => Field::Target,
            Field::Target => Field::Row1,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Row1 => Field::Target,
            Field::Row2 => Field::Row1,
            Field::Target => Field::Row2,
        }
    }

    /// The row a field edits, or None for the target field.
    pub fn row(self) -> Option<RowId> {
        match self {
            Field::Row1 => Some(RowId::One),
            Field::Row2 => Some(RowId::Two),
            Field::Target => None,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub row1_input: InputBox,
    pub row2_input: InputBox,
    pub target_input: InputBox,
    pub track: TrackState,
    pub focus: Field,
    /// Where each field was last drawn, in `Field::ALL` order.
    pub field_areas: [Rect; 3],
}

impl TuiState {
    /// Row fields start out holding the configured expressions.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            row1_input: InputBox::with_text("Row 1", ROW_PLACEHOLDER, config.row1.clone()),
            row2_input: InputBox::with_text("Row 2", ROW_PLACEHOLDER, config.row2.clone()),
            target_input: InputBox::new("Target", "Column #"),
            track: TrackState::new(),
            focus: Field::Row1,
            field_areas: [Rect::default(); 3],
        }
    }

    pub fn input_mut(&mut self, field: Field) -> &mut InputBox {
        match field {
            Field::Row1 => &mut self.row1_input,
            Field::Row2 => &mut self.row2_input,
            Field::Target => &mut self.target_input,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
        info!("Terminal modes restored");
    }
}

/// Apply one terminal event to the planner.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return Effect::None;
        }
        TuiEvent::MouseDown(..) | TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..) => {
            if let Some(track_event) = tui.track.handle_event(&event) {
                let action = match track_event {
                    TrackEvent::Grab(pointer) => Action::BeginDrag(pointer),
                    TrackEvent::Move(pointer) => Action::DragTo(pointer),
                    TrackEvent::Release => Action::EndDrag,
                };
                return update(app, action);
            }
            if let TuiEvent::MouseDown(col, row) = event
                && let Some(field) = ui::hit_test_field(&tui.field_areas, col, row)
            {
                tui.focus = field;
            }
            return Effect::None;
        }
        _ => {}
    }

    // Keystrokes go to the focused field
    let field = tui.focus;
    let Some(input_event) = tui.input_mut(field).handle_event(&event) else {
        return Effect::None;
    };
    match (field.row(), input_event) {
        (Some(row), InputEvent::Submit(expression)) => {
            update(app, Action::UpdateRow { row, expression })
        }
        (None, InputEvent::ContentChanged) => {
            update(app, Action::SetTarget(tui.target_input.buffer.clone()))
        }
        _ => Effect::None,
    }
}

/// Drop a drag still in progress, e.g. when quitting mid-drag.
fn release_drag(app: &mut App, tui: &mut TuiState) {
    if tui.track.release_capture() {
        info!("Releasing drag left open at shutdown");
        update(app, Action::EndDrag);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::from_config(&config);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes, mouse dragging unavailable: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    release_drag(&mut app, &mut tui);
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
