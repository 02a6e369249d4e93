//! # InputBox Component
//!
//! A single-line labelled text field: Row 1, Row 2 and Target each get one.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display the buffer, or a placeholder hint when empty and unfocused
//!
//! ## State Management
//!
//! The buffer is internal state. `focused` is a prop set by the parent each
//! frame. Cursor position and horizontal scroll are encapsulated in `CursorState`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). The buffer is kept.
    Submit(String),
    /// Text content changed
    ContentChanged,
    /// Only the cursor moved
    CursorMoved,
}

/// Labelled single-line text field.
///
/// # Props
///
/// - `focused`: whether keystrokes are routed here (from TUI state)
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Cursor position and horizontal scroll (see `CursorState`)
pub struct InputBox {
    label: &'static str,
    placeholder: &'static str,
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether this field has keyboard focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self::with_text(label, placeholder, String::new())
    }

    /// A field pre-filled with `text`, cursor at the end.
    pub fn with_text(label: &'static str, placeholder: &'static str, text: String) -> Self {
        Self {
            label,
            placeholder,
            cursor: CursorState::at_end(&text),
            buffer: text,
            focused: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor
            .update_scroll_offset(&self.buffer, inner_width(area.width));

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(self.label, border_style));

        let content = if self.buffer.is_empty() && !self.focused {
            Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                self.cursor.visible(&self.buffer),
                Style::default().fg(Color::Green),
            )
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: pasted newlines are dropped.
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor.pos, &line);
                self.cursor.pos += line.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Target", "Column #");
        assert!(input.buffer.is_empty());
        assert!(!input.focused);
        assert_eq!(input.label(), "Target");
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new("Target", "Column #");

        let res = input.handle_event(&TuiEvent::InputChar('1'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "1");

        let res = input.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "12");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "1");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = InputBox::with_text("Row 1", "[1-4][8-20]", "[1-8]".to_string());
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::InputChar('9'));
        assert_eq!(input.buffer, "[1-9]");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "1-9]");

        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(
            input.handle_event(&TuiEvent::CursorEnd),
            Some(InputEvent::CursorMoved)
        );
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = InputBox::with_text("Row 1", "[1-4][8-20]", "[1-4]".to_string());
        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("[1-4]".to_string())));
        assert_eq!(input.buffer, "[1-4]");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = InputBox::new("Row 2", "[1-4][8-20]");
        input.handle_event(&TuiEvent::Paste("[1-2]\n[5-6]\n".to_string()));
        assert_eq!(input.buffer, "[1-2][5-6]");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new("Target", "Column #");

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Target"));
        assert!(text.contains("Column #"));
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::with_text("Row 1", "[1-4][8-20]", "[1-8]".to_string());
        input.focused = true;

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Row 1"));
        assert!(text.contains("[1-8]"));
    }
}
