//! Maps quiz document theme colors onto terminal styles.
//!
//! Quiz documents carry CSS `#RRGGBB` colors. Each field is parsed
//! independently and falls back to a default terminal color when it does
//! not parse, so one bad value cannot take down the whole palette.
use quiz_core::Theme;
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Terminal palette derived from a quiz document's theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub main_bg: Color,
    pub contrast: Color,
    pub wrong: Color,
    pub success: Color,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        let fallback = Self::default();
        let colors = &theme.colors;
        Self {
            primary: parse_hex(&colors.primary).unwrap_or(fallback.primary),
            secondary: parse_hex(&colors.secondary).unwrap_or(fallback.secondary),
            main_bg: parse_hex(&colors.main_bg).unwrap_or(fallback.main_bg),
            contrast: parse_hex(&colors.contrast_text).unwrap_or(fallback.contrast),
            wrong: parse_hex(&colors.wrong).unwrap_or(fallback.wrong),
            success: parse_hex(&colors.success).unwrap_or(fallback.success),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Style for one alternative row.
    ///
    /// `reveal` is `None` before submission; afterwards it carries whether
    /// the submitted selection was correct.
    pub fn alternative_style(&self, is_selected: bool, reveal: Option<bool>) -> Style {
        match (is_selected, reveal) {
            (true, None) => Style::default()
                .fg(self.secondary)
                .add_modifier(Modifier::BOLD),
            (true, Some(true)) => Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD),
            (true, Some(false)) => Style::default().fg(self.wrong).add_modifier(Modifier::BOLD),
            (false, None) => Style::default().fg(self.contrast),
            (false, Some(_)) => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::DarkGray),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(self.wrong),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Yellow,
            secondary: Color::Cyan,
            main_bg: Color::Reset,
            contrast: Color::White,
            wrong: Color::LightRed,
            success: Color::LightGreen,
        }
    }
}

/// Parses a `#RRGGBB` CSS color into an RGB terminal color.
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        (rgb >> 16) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use quiz_core::ThemeColors;

    use super::*;

    fn theme(primary: &str) -> Theme {
        Theme {
            colors: ThemeColors {
                primary: primary.to_string(),
                secondary: "#29B6F6".to_string(),
                main_bg: "#0D0D1A".to_string(),
                contrast_text: "#FFFFFF".to_string(),
                wrong: "#FF5252".to_string(),
                success: "#66BB6A".to_string(),
            },
        }
    }

    #[test]
    fn css_colors_become_rgb() {
        let palette = Palette::from_theme(&theme("#FFB300"));
        assert_eq!(palette.primary, Color::Rgb(0xFF, 0xB3, 0x00));
        assert_eq!(palette.main_bg, Color::Rgb(0x0D, 0x0D, 0x1A));
        assert_eq!(palette.contrast, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn unparsable_fields_fall_back_individually() {
        let palette = Palette::from_theme(&theme("tomato"));
        assert_eq!(palette.primary, Palette::default().primary);
        // The other fields still parse.
        assert_eq!(palette.secondary, Color::Rgb(0x29, 0xB6, 0xF6));
    }

    #[test]
    fn short_and_unprefixed_values_are_rejected() {
        assert_eq!(parse_hex("FFB300"), None);
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("#ффффff"), None);
    }

    #[test]
    fn selection_styling_follows_the_reveal() {
        let palette = Palette::from_theme(&theme("#FFB300"));

        let picked = palette.alternative_style(true, None);
        assert_eq!(picked.fg, Some(palette.secondary));

        let right = palette.alternative_style(true, Some(true));
        assert_eq!(right.fg, Some(palette.success));

        let missed = palette.alternative_style(true, Some(false));
        assert_eq!(missed.fg, Some(palette.wrong));

        let bystander = palette.alternative_style(false, Some(true));
        assert_eq!(bystander.fg, Some(Color::DarkGray));
    }
}
