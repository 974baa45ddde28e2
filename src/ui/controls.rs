use crate::stopwatch::{Button, State};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, secondary: Rect, primary: Rect, state: State) {
    render_button(frame, secondary, Button::Secondary, state);
    render_button(frame, primary, Button::Primary, state);
}

fn render_button(frame: &mut Frame, area: Rect, button: Button, state: State) {
    let face = button.face(state);
    let style = Theme::button(face.tone, face.enabled);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(style);
    let paragraph = Paragraph::new(Span::styled(face.label, style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
