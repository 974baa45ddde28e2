use crate::stopwatch::Tone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const GO: Color = Color::Rgb(83, 215, 105);
    pub const HALT: Color = Color::Rgb(252, 61, 57);
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn readout() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button(tone: Tone, enabled: bool) -> Style {
        if !enabled {
            return Style::default().fg(Self::TEXT_MUTED);
        }
        let fg = match tone {
            Tone::Go => Self::GO,
            Tone::Halt => Self::HALT,
            Tone::Neutral => Color::White,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn lap_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn lap_current() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
    }

    pub fn lap_fastest() -> Style {
        Style::default().fg(Self::GO)
    }

    pub fn lap_slowest() -> Style {
        Style::default().fg(Self::HALT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn state_badge(tone: Tone) -> Style {
        let bg = match tone {
            Tone::Go => Self::GO,
            Tone::Halt => Self::HALT,
            Tone::Neutral => Color::Gray,
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}
