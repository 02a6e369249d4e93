//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the application name
//! - Display status messages (e.g., "Row 1 updated (17 plants)",
//!   "Row 2: no valid ranges found, layout kept")
//! - Show a "⇆ Dragging" indicator while the platform is held
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.platform.is_dragging());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Dragging**: `"Greenhouse Planner | Row 1 updated | ⇆ Dragging"`
//! 2. **Status message**: `"Greenhouse Planner | Row 1 updated"`
//! 3. **Default**: `"Greenhouse Planner"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const APP_TITLE: &str = "Greenhouse Planner";

/// Top status bar component showing status and the drag indicator.
pub struct TitleBar {
    /// Status message (e.g., "Row 1 updated (17 plants)")
    pub status_message: String,
    /// Whether the platform is being dragged
    pub dragging: bool,
}

impl TitleBar {
    pub fn new(status_message: String, dragging: bool) -> Self {
        Self {
            status_message,
            dragging,
        }
    }

    fn text(&self) -> String {
        match (self.status_message.is_empty(), self.dragging) {
            (true, false) => APP_TITLE.to_string(),
            (true, true) => format!("{APP_TITLE} | ⇆ Dragging"),
            (false, false) => format!("{APP_TITLE} | {}", self.status_message),
            (false, true) => format!("{APP_TITLE} | {} | ⇆ Dragging", self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
