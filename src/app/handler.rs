use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::stopwatch::Button;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if state.keys.quit.contains(&key.code) {
        return vec![Action::Quit];
    }
    if state.keys.primary.contains(&key.code) {
        return state.press(Button::Primary);
    }
    if state.keys.secondary.contains(&key.code) {
        return state.press(Button::Secondary);
    }

    match key.code {
        KeyCode::Down => state.scroll_laps(1),
        KeyCode::Up => state.scroll_laps(-1),
        KeyCode::PageDown => state.scroll_laps(10),
        KeyCode::PageUp => state.scroll_laps(-10),
        KeyCode::Home => state.scroll_laps(isize::MIN),
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout::button_at(state.viewport, mouse.column, mouse.row) {
                Some(button) => state.press(button),
                None => vec![],
            }
        }
        MouseEventKind::ScrollDown => {
            state.scroll_laps(1);
            vec![]
        }
        MouseEventKind::ScrollUp => {
            state.scroll_laps(-1);
            vec![]
        }
        _ => vec![],
    }
}
