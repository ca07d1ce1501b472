use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Colors and styles shared by all widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for borders and titles.
    pub accent: Color,
    /// Selected row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Default text.
    pub base_style: Style,
    /// Positive amounts and buys.
    pub gain_style: Style,
    /// Negative amounts and sells.
    pub loss_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Creates theme from a color name or hex code.
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Creates theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            gain_style: Style::default().fg(Color::Green),
            loss_style: Style::default().fg(Color::Red),
        }
    }

    /// Title style for panel borders.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        // Telegram's default button color.
        "telegram" => Color::Rgb(0x24, 0x81, 0xcc),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let short = |i: usize| channel(&s[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Telegram"), Color::Rgb(0x24, 0x81, 0xcc));
        assert_eq!(parse_color("Invalid"), Color::Cyan);
    }

    #[test]
    fn test_selection_uses_accent() {
        let theme = Theme::new("Yellow");
        assert_eq!(theme.selection_style.bg, Some(Color::Yellow));
    }
}
