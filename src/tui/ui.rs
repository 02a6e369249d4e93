//! Screen layout: wires `App` and `TuiState` into the components.
//!
//! ```text
//! ┌ title bar ─────────────────────────────────────────┐  1
//! │ Row 1 field        │ Row 2 field        │ Target   │  3
//! │ format hint                                        │  1
//! │ Row 1 plants                                       │  4
//! │ track + platform                                   │  3
//! │ Row 2 plants                                       │  4
//! │ path panel                                         │  rest
//! └────────────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::ranges::RowId;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{PathPanel, PlantRow, TitleBar, Track};
use crate::tui::{Field, TuiState};

const FORMAT_HINT: &str =
    "Format: [start-end][start-end] e.g., [1-4][8-20] · Tab next field · Enter update row · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    // Sync focus props before rendering
    for field in Field::ALL {
        tui.input_mut(field).focused = tui.focus == field;
    }

    let [
        title_area,
        input_area,
        hint_area,
        row1_area,
        track_area,
        row2_area,
        panel_area,
    ] = Layout::vertical([
        Length(1),
        Length(3),
        Length(1),
        Length(4),
        Length(3),
        Length(4),
        Min(6),
    ])
    .areas(frame.area());

    let field_areas: [Rect; 3] =
        Layout::horizontal([Percentage(40), Percentage(40), Percentage(20)]).areas(input_area);
    tui.field_areas = field_areas;

    TitleBar::new(app.status_message.clone(), app.platform.is_dragging()).render(frame, title_area);

    for (field, area) in Field::ALL.into_iter().zip(field_areas) {
        tui.input_mut(field).render(frame, area);
    }

    frame.render_widget(
        Span::styled(FORMAT_HINT, Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    let navigation = app.navigation();
    // The target is only highlighted in the row the route points to.
    let highlight = match &navigation {
        Some(Ok(nav)) => app
            .target()
            .and_then(|t| u32::try_from(t).ok())
            .map(|t| (nav.row, t)),
        _ => None,
    };
    let highlight_in = |id: RowId| highlight.filter(|(row, _)| *row == id).map(|(_, t)| t);

    PlantRow::new(&app.row1, highlight_in(RowId::One)).render(frame, row1_area);
    Track::new(
        &mut tui.track,
        app.platform.position(),
        app.platform.is_dragging(),
    )
    .render(frame, track_area);
    PlantRow::new(&app.row2, highlight_in(RowId::Two)).render(frame, row2_area);

    PathPanel {
        navigation: navigation.as_ref(),
        target: app.target(),
        total_plants: app.total_plants(),
        platform_position: app.platform.position(),
    }
    .render(frame, panel_area);
}

/// Hit test: which text field (if any) was drawn under the screen cell.
pub fn hit_test_field(field_areas: &[Rect; 3], col: u16, row: u16) -> Option<Field> {
    let point = Position::new(col, row);
    Field::ALL
        .into_iter()
        .zip(field_areas)
        .find(|(_, area)| area.contains(point))
        .map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app, test_config};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_default_layout() {
        let app = test_app();
        let mut tui = TuiState::from_config(&test_config());
        let text = draw(&app, &mut tui);

        assert!(text.contains("Greenhouse Planner"));
        assert!(text.contains("Row 1 (8 plants)"));
        assert!(text.contains("Row 2 (9 plants)"));
        assert!(text.contains("Format: [start-end][start-end] e.g., [1-4][8-20]"));
        assert!(text.contains("Total plants: 17"));
        assert!(text.contains("Platform position: 50%"));
        assert!(text.contains("Type a target column"));
    }

    #[test]
    fn test_draw_ui_records_hit_areas() {
        let app = test_app();
        let mut tui = TuiState::from_config(&test_config());
        draw(&app, &mut tui);

        assert_eq!(tui.field_areas[0], Rect::new(0, 1, 40, 3));
        assert_eq!(tui.field_areas[2], Rect::new(80, 1, 20, 3));
        assert_eq!(tui.track.hit_area(), Rect::new(0, 9, 100, 3));
        assert_eq!(tui.track.rail(), Rect::new(1, 10, 98, 1));
    }

    #[test]
    fn test_draw_ui_shows_route_and_highlight() {
        let mut app = test_app();
        update(&mut app, Action::SetTarget("15".to_string()));
        let mut tui = TuiState::from_config(&test_config());

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer_text(buffer);

        assert!(text.contains("Check Row 2"));
        assert!(text.contains("Direction: Go right"));
        // Exactly one bold yellow marker across both rows.
        let highlighted = buffer
            .content()
            .iter()
            .filter(|c| c.symbol() == "●" && c.fg == Color::Yellow)
            .count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_draw_ui_not_found() {
        let mut app = test_app();
        update(&mut app, Action::SetTarget("9999".to_string()));
        let mut tui = TuiState::from_config(&test_config());
        let text = draw(&app, &mut tui);
        assert!(text.contains("Column not found in either row"));
    }

    #[test]
    fn test_hit_test_field() {
        let areas = [
            Rect::new(0, 1, 40, 3),
            Rect::new(40, 1, 40, 3),
            Rect::new(80, 1, 20, 3),
        ];
        assert_eq!(hit_test_field(&areas, 0, 1), Some(Field::Row1));
        assert_eq!(hit_test_field(&areas, 45, 3), Some(Field::Row2));
        assert_eq!(hit_test_field(&areas, 99, 2), Some(Field::Target));
        assert_eq!(hit_test_field(&areas, 50, 4), None);
    }
}
