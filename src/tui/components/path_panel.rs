//! # PathPanel Component
//!
//! Footer summary plus the answer to "where do I go": target, row, direction
//! and how many plants to pass. Shows the error instead when the target is
//! in neither row, and a hint when no target is entered.
//!
//! Stateless; the navigation result is passed in freshly computed each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::path::{Navigation, PathError};
use crate::tui::component::Component;

pub struct PathPanel<'a> {
    pub navigation: Option<&'a Result<Navigation, PathError>>,
    pub target: Option<i64>,
    pub total_plants: usize,
    /// Platform position in percent.
    pub platform_position: f64,
}

impl PathPanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let muted = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("Total plants: {}", self.total_plants), muted),
            Span::styled("  ·  ", muted),
            Span::styled(
                format!("Platform position: {}%", self.platform_position.round() as u8),
                muted,
            ),
        ])];

        match (self.navigation, self.target) {
            (Some(Ok(nav)), Some(target)) => {
                let info = Style::default().fg(Color::Cyan);
                let strong = info.add_modifier(Modifier::BOLD);
                lines.push(Line::from(vec![
                    Span::styled("Target Column: ", info),
                    Span::styled(target.to_string(), strong),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Check Row ", info),
                    Span::styled(nav.row.to_string(), strong),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Direction: Go ", info),
                    Span::styled(nav.direction.to_string(), strong),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Columns to skip: ", info),
                    Span::styled(nav.columns_to_skip().to_string(), strong),
                ]));
            }
            (Some(Err(e)), _) => {
                lines.push(Line::from(Span::styled(
                    format!("✗ {e}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "Type a target column to plan a route",
                    muted.add_modifier(Modifier::ITALIC),
                )));
            }
        }
        lines
    }
}

impl Component for PathPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title("Path Calculation");
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::{Direction, compute_path};
    use crate::core::ranges::RowId;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(panel: &mut PathPanel) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_navigation() {
        let result = Ok(Navigation {
            row: RowId::Two,
            direction: Direction::Right,
            distance: 2.6,
        });
        let mut panel = PathPanel {
            navigation: Some(&result),
            target: Some(15),
            total_plants: 17,
            platform_position: 49.6,
        };
        let text = render(&mut panel);
        assert!(text.contains("Total plants: 17"));
        assert!(text.contains("Platform position: 50%"));
        assert!(text.contains("Target Column: 15"));
        assert!(text.contains("Check Row 2"));
        assert!(text.contains("Direction: Go right"));
        assert!(text.contains("Columns to skip: 3"));
    }

    #[test]
    fn test_renders_not_found() {
        let row1: Vec<u32> = (1..=8).collect();
        let row2: Vec<u32> = (9..=17).collect();
        let result = compute_path(&row1, &row2, 50.0, 9999);
        let mut panel = PathPanel {
            navigation: Some(&result),
            target: Some(9999),
            total_plants: 17,
            platform_position: 50.0,
        };
        let text = render(&mut panel);
        assert!(text.contains("Column not found in either row"));
        assert!(!text.contains("Check Row"));
    }

    #[test]
    fn test_renders_hint_without_target() {
        let mut panel = PathPanel {
            navigation: None,
            target: None,
            total_plants: 17,
            platform_position: 0.0,
        };
        let text = render(&mut panel);
        assert!(text.contains("Type a target column"));
        assert!(text.contains("Platform position: 0%"));
    }
}
