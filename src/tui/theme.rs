use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub match_bg: Color,
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x18),
            text: Color::Rgb(0xC8, 0xD0, 0xDA),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x61, 0xAF, 0xEF),
            dim: Color::Rgb(0x5F, 0x6B, 0x78),
            red: Color::Rgb(0xE0, 0x6C, 0x75),
            yellow: Color::Rgb(0xE5, 0xC0, 0x7B),
            green: Color::Rgb(0x98, 0xC3, 0x79),
            cyan: Color::Rgb(0x56, 0xB6, 0xC2),
            selection_bg: Color::Rgb(0x2C, 0x34, 0x40),
            match_bg: Color::Rgb(0xE5, 0xC0, 0x7B),
            match_fg: Color::Rgb(0x10, 0x14, 0x18),
        }
    }
}

/// Parse a hex color string like "#E06C75" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    "match_bg" => theme.match_bg = color,
                    "match_fg" => theme.match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Get the color for a priority level
    pub fn priority_color(&self, priority: &Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
            Priority::Other(_) => self.dim,
        }
    }
}
