//! # Application State
//!
//! Core planner state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── row1: Row                 // first row's position sequence
//! ├── row2: Row                 // second row's position sequence
//! ├── platform: Platform        // track position + drag state
//! ├── target_input: String      // target field text, parsed on demand
//! ├── max_row_length: usize     // longest sequence a row may hold
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The navigation result is never stored; `navigation()` derives it from the
//! fields above every time it is asked.

use log::warn;

use crate::core::config::{DEFAULT_ROW1, DEFAULT_ROW2, ResolvedConfig};
use crate::core::path::{Navigation, PathError, compute_path, parse_target};
use crate::core::platform::Platform;
use crate::core::ranges::{Row, RowId};

pub struct App {
    pub row1: Row,
    pub row2: Row,
    pub platform: Platform,
    pub target_input: String,
    pub max_row_length: usize,
    pub status_message: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut notices = Vec::new();
        let row1 = initial_row(RowId::One, &config.row1, DEFAULT_ROW1, config.max_row_length, &mut notices);
        let row2 = initial_row(RowId::Two, &config.row2, DEFAULT_ROW2, config.max_row_length, &mut notices);

        let status_message = if notices.is_empty() {
            String::from("Drag the platform, type a target column")
        } else {
            notices.join(" | ")
        };

        Self {
            row1,
            row2,
            platform: Platform::new(config.platform_position),
            target_input: String::new(),
            max_row_length: config.max_row_length,
            status_message,
        }
    }

    pub fn row(&self, id: RowId) -> &Row {
        match id {
            RowId::One => &self.row1,
            RowId::Two => &self.row2,
        }
    }

    pub fn row_mut(&mut self, id: RowId) -> &mut Row {
        match id {
            RowId::One => &mut self.row1,
            RowId::Two => &mut self.row2,
        }
    }

    pub fn total_plants(&self) -> usize {
        self.row1.len() + self.row2.len()
    }

    /// The target as an integer, if the field holds one.
    pub fn target(&self) -> Option<i64> {
        parse_target(&self.target_input)
    }

    /// Navigation for the current target, or None when no target is entered.
    pub fn navigation(&self) -> Option<Result<Navigation, PathError>> {
        let target = self.target()?;
        Some(compute_path(
            self.row1.positions(),
            self.row2.positions(),
            self.platform.position(),
            target,
        ))
    }
}

fn initial_row(
    id: RowId,
    expression: &str,
    fallback: &str,
    limit: usize,
    notices: &mut Vec<String>,
) -> Row {
    match Row::from_expression(id, expression, limit) {
        Ok(row) => row,
        Err(e) => {
            warn!("Row {} starting expression {:?} rejected: {}", id, expression, e);
            notices.push(format!("Row {id}: {e}, using {fallback}"));
            Row::from_expression(id, fallback, usize::MAX).unwrap_or_else(|_| Row::single(id, 1))
        }
    }
}
