use crate::stopwatch::Button;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub readout: Rect,
    pub secondary_button: Rect,
    pub primary_button: Rect,
    pub lap_table: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | readout | buttons | laps | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(5), // Elapsed time
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Lap table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Buttons sit side by side: Lap/Reset on the left, Start/Stop on the right
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(2)
        .spacing(4)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    AppLayout {
        header: main_chunks[0],
        readout: main_chunks[1],
        secondary_button: button_chunks[0],
        primary_button: button_chunks[1],
        lap_table: main_chunks[3],
        status_bar: main_chunks[4],
    }
}

/// Which button, if any, is drawn at the given cell.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let app_layout = compute_layout(area);
    let pos = Position::new(column, row);
    if app_layout.primary_button.contains(pos) {
        Some(Button::Primary)
    } else if app_layout.secondary_button.contains(pos) {
        Some(Button::Secondary)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_do_not_overlap() {
        let app_layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert!(!app_layout
            .primary_button
            .intersects(app_layout.secondary_button));
        assert!(app_layout.secondary_button.x < app_layout.primary_button.x);
        assert_eq!(app_layout.status_bar.y, 23);
    }

    #[test]
    fn test_button_at() {
        let area = Rect::new(0, 0, 80, 24);
        let app_layout = compute_layout(area);
        let p = app_layout.primary_button;
        let s = app_layout.secondary_button;
        assert_eq!(button_at(area, p.x, p.y), Some(Button::Primary));
        assert_eq!(button_at(area, s.x + s.width - 1, s.y + 2), Some(Button::Secondary));
        assert_eq!(button_at(area, 0, 0), None);
        assert_eq!(button_at(Rect::default(), 0, 0), None);
    }
}
