//! # Core Planner Logic
//!
//! This module contains the greenhouse planner's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ranges (parser)      │
//!                    │  • platform (drag)      │
//!                    │  • path (navigation)    │
//!                    │  • State + Action       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  `route`   │
//!          │  Adapter   │                │  command   │
//!          │ (ratatui)  │                │  (main.rs) │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ranges`]: Range expressions → row position sequences, and the row update policy
//! - [`platform`]: Platform position along the track and its drag state machine
//! - [`path`]: Nearest-row navigation (row, direction, distance)
//! - [`state`]: The `App` struct, all planner state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Starting layout from defaults, file, env and CLI

pub mod action;
pub mod config;
pub mod path;
pub mod platform;
pub mod ranges;
pub mod state;
