//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{DEFAULT_ROW1, DEFAULT_ROW2, ResolvedConfig};
use crate::core::platform::DEFAULT_PLATFORM_POSITION;
use crate::core::ranges::DEFAULT_MAX_ROW_LENGTH;
use crate::core::state::App;

/// The stock layout, independent of env vars: rows `[1-8]` and `[9-17]`, platform at 50%.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        row1: DEFAULT_ROW1.to_string(),
        row2: DEFAULT_ROW2.to_string(),
        platform_position: DEFAULT_PLATFORM_POSITION,
        max_row_length: DEFAULT_MAX_ROW_LENGTH,
    }
}

/// Creates a test App with the stock layout.
pub fn test_app() -> App {
    App::from_config(&test_config())
}

/// Flattens a TestBackend buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
