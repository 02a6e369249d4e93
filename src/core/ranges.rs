//! # Range Expressions
//!
//! Turns text like `[1-4][8-20]` into the ordered plant numbers of a row.
//!
//! ```text
//! "[1-3]junk[7-8][9-2]"  →  [1, 2, 3, 7, 8]
//! ```
//!
//! Every `[start-end]` group expands to `start..=end` in ascending order,
//! groups are concatenated left to right, and anything between groups is
//! ignored. A group with `start > end` contributes nothing. Duplicates are kept.

use log::debug;
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)-(\d+)\]").expect("range pattern is valid"));

/// Default cap on how many positions one row may expand to.
pub const DEFAULT_MAX_ROW_LENGTH: usize = 1000;

/// Why a row update was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The expression produced no positions.
    Empty,
    /// The expression would expand past the configured row length.
    TooLarge { requested: u64, limit: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Empty => write!(f, "no valid ranges found"),
            RangeError::TooLarge { requested, limit } => {
                write!(f, "expression expands to {requested} positions (limit {limit})")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Inclusive bounds of each bracketed group, in order of appearance.
fn spans(expression: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    RANGE_PATTERN.captures_iter(expression).filter_map(|caps| {
        match (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            (Ok(start), Ok(end)) => Some((start, end)),
            _ => {
                debug!("Skipping out-of-range group {:?}", &caps[0]);
                None
            }
        }
    })
}

fn span_len(start: u32, end: u32) -> u64 {
    if start > end {
        0
    } else {
        u64::from(end - start) + 1
    }
}

/// Expand a range expression into its position sequence.
///
/// Never fails: malformed or empty input yields an empty sequence.
pub fn parse(expression: &str) -> Vec<u32> {
    spans(expression)
        .flat_map(|(start, end)| start..=end)
        .collect()
}

/// Like [`parse`], but rejects empty results and expansions longer than `limit`.
///
/// The length is checked before anything is allocated.
pub fn parse_checked(expression: &str, limit: usize) -> Result<Vec<u32>, RangeError> {
    let requested: u64 = spans(expression).map(|(s, e)| span_len(s, e)).sum();
    if requested == 0 {
        return Err(RangeError::Empty);
    }
    if requested > limit as u64 {
        return Err(RangeError::TooLarge { requested, limit });
    }
    Ok(parse(expression))
}

/// Replace `current` with the parse of `raw`, unless the parse is empty.
pub fn update_row(current: Vec<u32>, raw: &str) -> Vec<u32> {
    let parsed = parse(raw);
    if parsed.is_empty() { current } else { parsed }
}

/// Which of the two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    One,
    Two,
}

impl RowId {
    pub fn number(self) -> u8 {
        match self {
            RowId::One => 1,
            RowId::Two => 2,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One row of plants. The sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    positions: Vec<u32>,
}

impl Row {
    /// Build a row from an expression, rejecting it exactly as [`Row::update`] would.
    pub fn from_expression(id: RowId, expression: &str, limit: usize) -> Result<Self, RangeError> {
        let positions = parse_checked(expression, limit)?;
        Ok(Self { id, positions })
    }

    /// A row holding exactly one plant.
    pub fn single(id: RowId, position: u32) -> Self {
        Self {
            id,
            positions: vec![position],
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a row never holds zero plants.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Re-parse the row from `raw`. On error the current sequence is kept.
    ///
    /// Returns the new number of positions.
    pub fn update(&mut self, raw: &str, limit: usize) -> Result<usize, RangeError> {
        self.positions = parse_checked(raw, limit)?;
        Ok(self.positions.len())
    }
}
