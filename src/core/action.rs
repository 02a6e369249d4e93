//! # Actions
//!
//! Everything that can happen in the planner becomes an `Action`.
//! User presses Enter in the Row 1 field? That's `Action::UpdateRow`.
//! Mouse goes down on the track? That's `Action::BeginDrag(pointer)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply actions, assert on `App`.
//! And debuggable: every action is logged.

use log::{debug, info, warn};

use crate::core::platform::TrackPointer;
use crate::core::ranges::RowId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-parse a row from its expression (the "Update" button).
    UpdateRow { row: RowId, expression: String },
    /// The target field changed.
    SetTarget(String),
    /// Pointer pressed on the track or the platform.
    BeginDrag(TrackPointer),
    /// Pointer moved anywhere while a drag is active.
    DragTo(TrackPointer),
    /// Pointer released anywhere, or the drag was torn down.
    EndDrag,
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::UpdateRow { row, expression } => {
            let limit = app.max_row_length;
            match app.row_mut(row).update(&expression, limit) {
                Ok(len) => {
                    info!("Row {} updated from {:?}: {} plants", row, expression, len);
                    app.status_message = format!("Row {row} updated ({len} plants)");
                }
                Err(e) => {
                    warn!("Row {} update from {:?} rejected: {}", row, expression, e);
                    app.status_message = format!("Row {row}: {e}, layout kept");
                }
            }
            Effect::None
        }
        Action::SetTarget(text) => {
            app.target_input = text;
            Effect::None
        }
        Action::BeginDrag(pointer) => {
            app.platform.begin_drag(pointer);
            Effect::None
        }
        Action::DragTo(pointer) => {
            if !app.platform.drag_to(pointer) {
                debug!("Ignoring drag move while idle");
            }
            Effect::None
        }
        Action::EndDrag => {
            if app.platform.is_dragging() {
                app.platform.end_drag();
                debug!("Platform released at {:.1}%", app.platform.position());
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
