//! Cursor position tracking and horizontal scrolling for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll offset.
//! All methods accept `buffer: &str` explicitly; the text itself is owned by
//! `InputBox`, keeping the dependency visible.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Left + right borders consumed horizontally
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

/// Width available for text inside the bordered block.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn columns(chars: impl Iterator<Item = char>) -> u16 {
    chars.map(|c| c.width().unwrap_or(0) as u16).sum()
}

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Number of leading characters scrolled out of view
    pub scroll_offset: usize,
}

impl CursorState {
    /// Cursor placed after the last character.
    pub fn at_end(buffer: &str) -> Self {
        Self {
            pos: buffer.len(),
            scroll_offset: 0,
        }
    }

    /// Index of the character the cursor sits before.
    fn char_index(&self, buffer: &str) -> usize {
        buffer[..self.pos].chars().count()
    }

    /// Scroll just enough to keep the cursor inside `visible_width` columns.
    pub fn update_scroll_offset(&mut self, buffer: &str, visible_width: u16) {
        let cursor = self.char_index(buffer);
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
            return;
        }
        if visible_width == 0 {
            self.scroll_offset = cursor;
            return;
        }
        // Leave one cell for the cursor itself past the last character.
        while self.scroll_offset < cursor
            && columns(buffer.chars().skip(self.scroll_offset).take(cursor - self.scroll_offset))
                >= visible_width
        {
            self.scroll_offset += 1;
        }
    }

    /// The slice of text currently scrolled into view.
    pub fn visible<'a>(&self, buffer: &'a str) -> &'a str {
        match buffer.char_indices().nth(self.scroll_offset) {
            Some((start, _)) => &buffer[start..],
            None => "",
        }
    }

    /// Screen position of the cursor inside a bordered `area`.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let cursor = self.char_index(buffer);
        let offset = columns(
            buffer
                .chars()
                .skip(self.scroll_offset)
                .take(cursor.saturating_sub(self.scroll_offset)),
        );
        let max_col = area.x + area.width.saturating_sub(BORDER_OFFSET + 1);
        ((area.x + BORDER_OFFSET + offset).min(max_col), area.y + BORDER_OFFSET)
    }
}
