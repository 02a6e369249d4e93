//! # TUI Components
//!
//! This module contains all UI components for the planner screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the latest notice and drag indicator
//! - `PlantRow`: One row of plants, target highlighted
//! - `PathPanel`: Totals, platform position and the navigation answer
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Labelled single-line field (Row 1, Row 2, Target)
//! - `TrackState`/`Track`: The rail and the draggable platform, owning the
//!   drag capture
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. The screen layout in `ui.rs` wires them up:
//!
//! ```rust,ignore
//! PlantRow::new(&app.row1, highlight).render(frame, row1_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── plant_row.rs    (Row of plants)
//! ├── track.rs        (Rail, platform, drag capture)
//! ├── path_panel.rs   (Navigation answer and totals)
//! └── input_box/      (Text field with cursor handling)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod path_panel;
pub use path_panel::PathPanel;
pub mod plant_row;
pub use plant_row::PlantRow;
pub mod track;
pub use track::{Track, TrackEvent, TrackState};
