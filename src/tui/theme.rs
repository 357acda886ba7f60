use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub cyan: Color,
    pub drop_ok_bg: Color,
    pub drop_bad_bg: Color,
    pub selection_bg: Color,
    /// Per-category accent colors
    pub category_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut category_colors = HashMap::new();
        category_colors.insert("調剤業務".into(), Color::Rgb(0x44, 0x88, 0xFF));
        category_colors.insert("配達・営業".into(), Color::Rgb(0x44, 0xFF, 0x88));
        category_colors.insert("事務・管理".into(), Color::Rgb(0xCC, 0x66, 0xFF));
        category_colors.insert("業務管理".into(), Color::Rgb(0xFF, 0xA5, 0x00));
        category_colors.insert("その他".into(), Color::Rgb(0x9A, 0x9A, 0x9A));

        Theme {
            background: Color::Rgb(0x10, 0x10, 0x1C),
            text: Color::Rgb(0xC8, 0xC8, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x41, 0x96, 0xFB),
            dim: Color::Rgb(0x6E, 0x6E, 0x85),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            drop_ok_bg: Color::Rgb(0x11, 0x3A, 0x24),
            drop_bad_bg: Color::Rgb(0x3A, 0x11, 0x11),
            selection_bg: Color::Rgb(0x23, 0x32, 0x4D),
            category_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "drop_ok_bg" => theme.drop_ok_bg = color,
                "drop_bad_bg" => theme.drop_bad_bg = color,
                "selection_bg" => theme.selection_bg = color,
                _ => {}
            }
        }

        for (category, value) in &ui.category_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.category_colors.insert(category.clone(), color);
            }
        }

        theme
    }

    /// Accent color for a category, falling back to the その他 gray.
    pub fn category_color(&self, category: &str) -> Color {
        self.category_colors
            .get(category)
            .or_else(|| self.category_colors.get("その他"))
            .copied()
            .unwrap_or(Color::Gray)
    }
}
