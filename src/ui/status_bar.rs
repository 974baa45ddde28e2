use crate::app::state::AppState;
use crate::stopwatch::{State, Tone};
use crate::ui::state_label;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tone = match state.state() {
        State::Running => Tone::Go,
        State::Stopped => Tone::Halt,
        State::Reset => Tone::Neutral,
    };

    let mut parts: Vec<Span> = vec![
        Span::styled(format!(" {} ", state_label(state.state())), Theme::state_badge(tone)),
        Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()),
    ];

    let keys = &state.config.keys;
    let first = |names: &[String]| names.first().cloned().unwrap_or_else(|| "-".to_string());
    let hints = format!(
        " {} start/stop · {} lap/reset · {} quit ",
        first(&keys.primary),
        first(&keys.secondary),
        first(&keys.quit)
    );

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
