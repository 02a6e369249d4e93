//! # Path Calculation
//!
//! Answers "which row, which way, how far" for a target plant.
//!
//! Each row has its own index scale: the platform at `p` percent sits at
//! fractional index `p / 100 * (len - 1)` of that row. Distance is measured in
//! plant positions between that index and the target's index. A row of one
//! plant always puts the platform at index 0.

use serde::Serialize;
use std::fmt;

use crate::core::ranges::RowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Instruction for reaching the target from the platform's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    pub row: RowId,
    pub direction: Direction,
    /// Unrounded distance in plant positions.
    pub distance: f64,
}

impl Navigation {
    /// Distance rounded to whole plants for display.
    pub fn columns_to_skip(&self) -> u64 {
        self.distance.round() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    NotFound { target: i64 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound { .. } => write!(f, "Column not found in either row"),
        }
    }
}

impl std::error::Error for PathError {}

/// Parse the target field. Anything that is not an integer means "no target".
pub fn parse_target(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn candidate(row: RowId, positions: &[u32], platform_percent: f64, target: u32) -> Option<Navigation> {
    let target_index = positions.iter().position(|&p| p == target)? as f64;
    let span = positions.len().saturating_sub(1) as f64;
    let platform_index = platform_percent / 100.0 * span;
    let direction = if target_index > platform_index {
        Direction::Right
    } else {
        Direction::Left
    };
    Some(Navigation {
        row,
        direction,
        distance: (target_index - platform_index).abs(),
    })
}

/// Find the nearest row containing `target` and how to get there.
///
/// When both rows hold the target the smaller distance wins; on a tie row 1 wins.
pub fn compute_path(
    row1: &[u32],
    row2: &[u32],
    platform_percent: f64,
    target: i64,
) -> Result<Navigation, PathError> {
    let not_found = PathError::NotFound { target };
    let Ok(target_number) = u32::try_from(target) else {
        return Err(not_found);
    };

    let first = candidate(RowId::One, row1, platform_percent, target_number);
    let second = candidate(RowId::Two, row2, platform_percent, target_number);

    match (first, second) {
        (Some(a), Some(b)) => Ok(if b.distance < a.distance { b } else { a }),
        (Some(a), None) => Ok(a),
        (None, Some(b)) => Ok(b),
        (None, None) => Err(not_found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row1() -> Vec<u32> {
        (1..=8).collect()
    }

    fn row2() -> Vec<u32> {
        (9..=17).collect()
    }

    #[test]
    fn test_platform_at_start_on_target() {
        let nav = compute_path(&row1(), &row2(), 0.0, 1).unwrap();
        assert_eq!(nav.row, RowId::One);
        assert_eq!(nav.distance, 0.0);
        assert_eq!(nav.direction, Direction::Left);
    }

    #[test]
    fn test_platform_at_end_moves_left() {
        let nav = compute_path(&row1(), &row2(), 100.0, 1).unwrap();
        assert_eq!(nav.row, RowId::One);
        assert_eq!(nav.distance, 7.0);
        assert_eq!(nav.direction, Direction::Left);
        assert_eq!(nav.columns_to_skip(), 7);
    }

    #[test]
    fn test_target_right_of_platform() {
        // Row 2 has 9 plants: 50% sits at index 4 (plant 13).
        let nav = compute_path(&row1(), &row2(), 50.0, 17).unwrap();
        assert_eq!(nav.row, RowId::Two);
        assert_eq!(nav.direction, Direction::Right);
        assert_eq!(nav.distance, 4.0);
    }

    #[test]
    fn test_not_found() {
        let err = compute_path(&row1(), &row2(), 50.0, 9999).unwrap_err();
        assert_eq!(err, PathError::NotFound { target: 9999 });
        assert_eq!(err.to_string(), "Column not found in either row");
    }

    #[test]
    fn test_negative_target_not_found() {
        assert!(compute_path(&row1(), &row2(), 50.0, -1).is_err());
    }

    #[test]
    fn test_nearest_row_wins() {
        // Target 5 at index 4 in row 1 and index 1 in row 2, platform at 0.
        let a = vec![1, 2, 3, 4, 5];
        let b = vec![9, 5, 10];
        let nav = compute_path(&a, &b, 0.0, 5).unwrap();
        assert_eq!(nav.row, RowId::Two);
        assert_eq!(nav.distance, 1.0);

        // Swapped: the nearer one is now row 1.
        let nav = compute_path(&b, &a, 0.0, 5).unwrap();
        assert_eq!(nav.row, RowId::One);
    }

    #[test]
    fn test_tie_prefers_row_one() {
        let a = vec![1, 7];
        let b = vec![3, 7];
        let nav = compute_path(&a, &b, 0.0, 7).unwrap();
        assert_eq!(nav.row, RowId::One);
    }

    #[test]
    fn test_compares_unrounded_distance() {
        // Row 1 (len 5): 30% → index 1.2, target index 2 → 0.8.
        // Row 2 (len 3): 30% → index 0.6, target index 0 → 0.6.
        // Both round to 1, but row 2 is strictly closer.
        let a = vec![10, 11, 7, 12, 13];
        let b = vec![7, 20, 21];
        let nav = compute_path(&a, &b, 30.0, 7).unwrap();
        assert_eq!(nav.row, RowId::Two);
        assert_eq!(nav.direction, Direction::Left);
    }

    #[test]
    fn test_single_plant_row_ignores_platform() {
        let single = vec![42];
        for percent in [0.0, 37.5, 100.0] {
            let nav = compute_path(&single, &[], percent, 42).unwrap();
            assert_eq!(nav.distance, 0.0);
            assert_eq!(nav.direction, Direction::Left);
        }
    }

    #[test]
    fn test_duplicate_uses_first_index() {
        let a = vec![4, 5, 4];
        let nav = compute_path(&a, &[], 100.0, 4).unwrap();
        assert_eq!(nav.distance, 2.0);
    }

    #[test]
    fn test_columns_to_skip_rounds_half_up() {
        let nav = Navigation {
            row: RowId::One,
            direction: Direction::Right,
            distance: 2.5,
        };
        assert_eq!(nav.columns_to_skip(), 3);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("12"), Some(12));
        assert_eq!(parse_target(" 7 "), Some(7));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("abc"), None);
    }
}
