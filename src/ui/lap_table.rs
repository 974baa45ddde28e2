use crate::app::state::AppState;
use crate::stopwatch::{format_elapsed, Lap};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let laps = &state.laps;
    let ui = &state.config.ui;

    let mut rows: Vec<Row> = Vec::new();

    // In-progress lap pinned on top, numbered as the lap it will become
    if ui.show_current_lap {
        if let Some(current) = state.current_lap() {
            rows.push(lap_row(
                format!("Lap {}", laps.len() + 1),
                current,
                Theme::lap_current(),
            ));
        }
    }

    let (fastest, slowest) = if ui.highlight_extremes {
        (laps.fastest(), laps.slowest())
    } else {
        (None, None)
    };

    for lap in laps.laps().iter().skip(state.lap_scroll_offset) {
        rows.push(lap_row(lap.label.clone(), lap.duration, lap_style(lap, fastest, slowest)));
    }

    if rows.is_empty() {
        rows.push(Row::new(vec![Cell::from(Span::styled(
            " —",
            Style::default().fg(Theme::TEXT_MUTED),
        ))]));
    }

    let title = if laps.is_empty() {
        " Laps ".to_string()
    } else {
        format!(" Laps ({}) ", laps.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(12)]).block(block);
    frame.render_widget(table, area);
}

fn lap_row(label: String, duration: std::time::Duration, style: Style) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!(" {}", label)),
        Cell::from(Text::from(format_elapsed(duration)).alignment(Alignment::Right)),
    ])
    .style(style)
}

fn lap_style(lap: &Lap, fastest: Option<usize>, slowest: Option<usize>) -> Style {
    if Some(lap.number) == fastest {
        Theme::lap_fastest()
    } else if Some(lap.number) == slowest {
        Theme::lap_slowest()
    } else {
        Theme::lap_normal()
    }
}
