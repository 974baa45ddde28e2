//! Key-name parsing for the `[keys]` config section.

use crossterm::event::KeyCode;

/// Parse a key name such as `"space"`, `"enter"`, `"f5"` or a single
/// character. Names are case-insensitive except for single characters.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        _ => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(code)
}

/// Key names resolved to key codes. Unknown names are skipped; the config is
/// validated before this is built.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub primary: Vec<KeyCode>,
    pub secondary: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyMap {
    pub fn from_config(keys: &super::model::KeyConfig) -> Self {
        let resolve = |names: &[String]| names.iter().filter_map(|n| parse_key(n)).collect();
        Self {
            primary: resolve(&keys.primary),
            secondary: resolve(&keys.secondary),
            quit: resolve(&keys.quit),
        }
    }
}
