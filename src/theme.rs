//! Colour palette handed to the text renderer.
//!
//! A [`Theme`] is a plain value: the CLI builds one from [`crate::PlannerConfig`]
//! and passes it to [`crate::Itinerary::render`]. Nothing reads a global palette.

use crate::error::{PlannerError, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit colour parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PlannerError::Config(format!(
                "invalid colour `{}`: expected #rrggbb",
                hex
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|err| PlannerError::Config(format!("invalid colour `{}`: {}", hex, err)))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Semantic slot in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRole {
    Background,
    Surface,
    Text,
    TextSecondary,
    Primary,
    PrimaryText,
    Border,
    CardBackground,
    HeaderBackground,
    TabBackground,
    TabActiveText,
    TabInactiveText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub primary_text: Color,
    pub border: Color,
    pub card_background: Color,
    pub header_background: Color,
    pub tab_background: Color,
    pub tab_active_text: Color,
    pub tab_inactive_text: Color,
    /// Emit ANSI escapes from [`Theme::paint`]
    #[serde(default)]
    pub ansi: bool,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::rgb(0xf8, 0xfa, 0xfc),
            surface: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x1e, 0x29, 0x3b),
            text_secondary: Color::rgb(0x64, 0x74, 0x8b),
            primary: Color::rgb(0x25, 0x63, 0xeb),
            primary_text: Color::rgb(0xff, 0xff, 0xff),
            border: Color::rgb(0xe5, 0xe7, 0xeb),
            card_background: Color::rgb(0xff, 0xff, 0xff),
            header_background: Color::rgb(0x1e, 0x40, 0xaf),
            tab_background: Color::rgb(0xff, 0xff, 0xff),
            tab_active_text: Color::rgb(0x25, 0x63, 0xeb),
            tab_inactive_text: Color::rgb(0x6b, 0x72, 0x80),
            ansi: false,
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn color(&self, role: ThemeRole) -> Color {
        match role {
            ThemeRole::Background => self.background,
            ThemeRole::Surface => self.surface,
            ThemeRole::Text => self.text,
            ThemeRole::TextSecondary => self.text_secondary,
            ThemeRole::Primary => self.primary,
            ThemeRole::PrimaryText => self.primary_text,
            ThemeRole::Border => self.border,
            ThemeRole::CardBackground => self.card_background,
            ThemeRole::HeaderBackground => self.header_background,
            ThemeRole::TabBackground => self.tab_background,
            ThemeRole::TabActiveText => self.tab_active_text,
            ThemeRole::TabInactiveText => self.tab_inactive_text,
        }
    }

    /// Paint `text` in the foreground colour for `role`.
    ///
    /// Returns `text` untouched when `ansi` is off. Otherwise `colored`
    /// decides, so `NO_COLOR` and [`colored::control::set_override`] still apply.
    pub fn paint(&self, role: ThemeRole, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let Color { r, g, b } = self.color(role);
        text.truecolor(r, g, b).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip() {
        let color = Color::from_hex("#2563eb").unwrap();
        assert_eq!(color, Color::rgb(0x25, 0x63, 0xeb));
        assert_eq!(color.to_string(), "#2563eb");
        assert!(Color::from_hex("#25g3eb").is_err());
        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn test_paint_respects_ansi_flag() {
        let plain = Theme::light();
        assert_eq!(plain.paint(ThemeRole::Primary, "Day 1"), "Day 1");

        colored::control::set_override(true);
        let painted = Theme::light()
            .with_ansi(true)
            .paint(ThemeRole::Primary, "Day 1");
        assert!(painted.contains("38;2;37;99;235"));
        assert!(painted.contains("Day 1"));
    }

    #[test]
    fn test_theme_serializes_hex_strings() {
        let value = serde_json::to_value(Theme::light()).unwrap();
        assert_eq!(value["header_background"], "#1e40af");
        assert_eq!(value["tab_inactive_text"], "#6b7280");
    }
}
