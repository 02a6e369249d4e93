//! # PlantRow Component
//!
//! Draws one row of plants as evenly spaced markers with their numbers
//! underneath, leftmost position first.
//!
//! ```text
//! ╭──────────────── Row 1 (8 plants) ────────────────╮
//! │   ●     ●     ●     ●     ●     ●     ●     ●    │
//! │   1     2     3     4     5     6     7     8    │
//! ╰──────────────────────────────────────────────────╯
//! ```
//!
//! Stateless: receives the row and the plant to highlight as props. When the
//! row has more plants than the area has columns, plants that get no column
//! are skipped rather than overdrawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};
use unicode_width::UnicodeWidthStr;

use crate::core::ranges::Row;
use crate::tui::component::Component;

const MARKER: &str = "●";

pub struct PlantRow<'a> {
    pub row: &'a Row,
    /// Plant to draw highlighted (the navigation target), if any.
    pub highlight: Option<u32>,
}

impl<'a> PlantRow<'a> {
    pub fn new(row: &'a Row, highlight: Option<u32>) -> Self {
        Self { row, highlight }
    }

    fn title(&self) -> String {
        format!("Row {} ({} plants)", self.row.id(), self.row.len())
    }
}

/// Split `width` columns into `count` slots, as `(offset, width)` pairs.
/// Slots differ in width by at most one column.
pub fn slots(count: usize, width: u16) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let w = width as usize;
    (0..count)
        .map(|i| {
            let start = i * w / count;
            let end = (i + 1) * w / count;
            (start as u16, (end - start) as u16)
        })
        .collect()
}

impl Component for PlantRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM))
            .title(self.title())
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let plant = Style::default().fg(Color::Green);
        let target = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let label_y = (inner.height > 1).then_some(inner.y + 1);

        let buf = frame.buffer_mut();
        for (&number, (offset, width)) in self.row.positions().iter().zip(slots(self.row.len(), inner.width)) {
            if width == 0 {
                continue;
            }
            let style = if self.highlight == Some(number) { target } else { plant };
            let x = inner.x + offset;
            buf.set_string(x + width / 2, inner.y, MARKER, style);

            if let Some(y) = label_y {
                let label = number.to_string();
                let label_width = (label.width() as u16).min(width);
                let label_x = x + (width - label_width) / 2;
                buf.set_stringn(label_x, y, &label, width as usize, style);
            }
        }
    }
}
