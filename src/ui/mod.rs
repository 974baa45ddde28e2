mod controls;
mod lap_table;
pub mod layout;
mod readout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::stopwatch::State;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    readout::render(frame, app_layout.readout, state);
    controls::render(
        frame,
        app_layout.secondary_button,
        app_layout.primary_button,
        state.state(),
    );
    lap_table::render(frame, app_layout.lap_table, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" lapwatch ", theme::Theme::title()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme::Theme::TEXT_MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub(crate) fn state_label(state: State) -> &'static str {
    match state {
        State::Reset => "READY",
        State::Running => "RUNNING",
        State::Stopped => "STOPPED",
    }
}
